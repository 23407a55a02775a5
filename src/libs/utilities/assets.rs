// Downloading store assets (icon, screenshots) to the extension folder.

use crate::libs::errors::FetchError;
use crate::libs::utilities::file_operations::write_permissive;
use std::io::Read;
use std::path::Path;

/// Something that can put the content behind a URL into a file.
///
/// The pull pipeline only depends on this trait, which keeps the assembler
/// testable without a network.
pub trait AssetFetcher {
    /// Downloads `url` and writes the whole body to `target`, overwriting it.
    /// The parent directory of `target` must already exist.
    fn fetch(&self, url: &str, target: &Path) -> Result<(), FetchError>;
}

/// The real fetcher, backed by the shared `ureq` agent.
pub struct HttpAssetFetcher {
    agent: ureq::Agent,
}

impl HttpAssetFetcher {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl AssetFetcher for HttpAssetFetcher {
    fn fetch(&self, url: &str, target: &Path) -> Result<(), FetchError> {
        // HTTP level events go through `tracing` only.
        tracing::debug!(url, target = %target.display(), "downloading asset");

        let response = self.agent.get(url).call().map_err(|e| match e.kind() {
            ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                FetchError::CreateRequest(Box::new(e))
            }
            _ => FetchError::Download(Box::new(e)),
        })?;

        // The whole body is buffered so a failing read never leaves a truncated file behind.
        let mut content = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut content)
            .map_err(FetchError::ReadBody)?;

        write_permissive(target, &content).map_err(FetchError::Write)?;

        tracing::debug!(bytes = content.len(), target = %target.display(), "asset written");
        Ok(())
    }
}
