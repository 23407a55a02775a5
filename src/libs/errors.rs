// Error types for every stage of the pull pipeline.
// Each variant's message starts with the short label of the stage that failed,
// so the chain printed by `main` reads like `pull: download icon: download file: ...`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while downloading a single asset to disk.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("create request: {0}")]
    CreateRequest(Box<ureq::Error>),
    #[error("download file: {0}")]
    Download(Box<ureq::Error>),
    #[error("read file body: {0}")]
    ReadBody(io::Error),
    #[error("write to file: {0}")]
    Write(io::Error),
}

/// Failure talking to the Shopware account API.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("missing account credentials: set {0}")]
    MissingCredentials(&'static str),
    #[error("request to {url} failed: {cause}")]
    Request { url: String, cause: Box<ureq::Error> },
    #[error("{url} responded with status {status}: {body}")]
    Status { url: String, status: u16, body: String },
    #[error("cannot decode response from {url}: {cause}")]
    Decode { url: String, cause: io::Error },
    #[error("no company membership found for this account")]
    NoMembership,
    #[error("account is not a member of company {0}")]
    CompanyNotFound(u64),
    #[error("this company is not unlocked as producer")]
    NotProducer,
    #[error("cannot find extension by name {0}")]
    ExtensionNotFound(String),
}

/// Failure resolving the local extension folder.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("cannot resolve path {path}: {cause}")]
    Path { path: String, cause: io::Error },
    #[error("unknown extension type at {0}")]
    UnknownType(PathBuf),
    #[error("cannot read {path}: {cause}")]
    Read { path: PathBuf, cause: io::Error },
    #[error("cannot parse composer.json: {0}")]
    Composer(serde_json::Error),
    #[error("composer.json type is not shopware-platform-plugin")]
    NotPlatformPlugin,
    #[error("cannot parse manifest.xml: {0}")]
    Manifest(String),
    #[error("extension name is empty")]
    EmptyName,
}

/// Failure while mapping the store record into the local configuration.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("create resources folder {path}: {cause}")]
    CreateDir { path: PathBuf, cause: io::Error },
    #[error("download icon: {0}")]
    Icon(FetchError),
    #[error("download image {index}: {cause}")]
    Image { index: usize, cause: FetchError },
    #[error("extension has no info record at position {0}")]
    MissingInfo(usize),
    #[error("image {index} has no detail at position {detail}")]
    MissingImageDetail { index: usize, detail: usize },
}

/// Failure reading the CLI config or writing the extension config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {cause}")]
    Read { path: PathBuf, cause: io::Error },
    #[error("cannot parse config file {path}: {cause}")]
    Parse {
        path: PathBuf,
        cause: serde_yaml::Error,
    },
    #[error("serialize config: {0}")]
    Serialize(serde_yaml::Error),
    #[error("write config {path}: {cause}")]
    Write { path: PathBuf, cause: io::Error },
}
