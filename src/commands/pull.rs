// src/commands/pull.rs
// The `pull` command: turns the store record of an extension into a local
// `.shopware-extension.yml` and downloads the icon and screenshots next to it.

// The account API client and the trait the pipeline talks to.
use crate::libs::account_client::{AccountClient, ProducerApi};
// Maps the store record into the local config and downloads the assets.
use crate::libs::config_assembler::assemble_config;
// Config file location, loading, and the credential merge with flags and env.
use crate::libs::config_loading::{
    AccountOverrides, load_cli_config, resolve_config_path, resolve_credentials,
};
// Serializes and writes `.shopware-extension.yml`.
use crate::libs::config_writer::write_config;
// Recognizes an app or a platform plugin in the given folder.
use crate::libs::extension_locator::LocalExtension;
// The one HTTP agent shared by the account client and the downloads.
use crate::libs::http_client::build_agent;
// Asset download seam and its HTTP implementation.
use crate::libs::utilities::assets::{AssetFetcher, HttpAssetFetcher};
// Turns the user supplied path into an absolute one.
use crate::libs::utilities::path_helpers::absolute_path;
// Our colored logging macros.
use crate::{log_debug, log_info};
// `anyhow` for the `pull: ...` error chain printed by `main`.
use anyhow::{Context, Result};
// Colors for names and paths in the log output.
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Everything `pull` needs besides the extension path.
pub struct PullOptions {
    pub config: Option<String>,
    pub account: AccountOverrides,
    pub api_url: String,
}

/// Entry point of `pull <path>`. Any error aborts the whole run.
pub fn run(path: &str, options: PullOptions) -> Result<()> {
    // 1. Credentials: config file first, then flags and environment on top.
    let config_path = resolve_config_path(options.config.as_deref());
    let cli_config = load_cli_config(config_path.as_ref()).context("pull")?;
    let credentials = resolve_credentials(&cli_config, &options.account).context("pull")?;

    // 2. Find out what kind of extension lives in the folder and what it is called.
    let extension_root = absolute_path(path).context("pull")?;
    let extension = LocalExtension::from_folder(&extension_root).context("pull")?;
    log_info!(
        "[Pull] Pulling store data for {} ({:?})",
        extension.name().bold(),
        extension.kind()
    );

    // 3. Log in and switch to the producer of the active company.
    let agent = build_agent();
    let client = AccountClient::login(agent.clone(), &options.api_url, &credentials).context("pull")?;
    let producer = client.producer().context("pull")?;
    // Downloads reuse the same agent, so they share its timeouts.
    let fetcher = HttpAssetFetcher::new(agent);

    // 4. Fetch, download, assemble, write.

    pull_store_config(extension.path(), extension.name(), &producer, &fetcher)?;

    println!(
        "{}",
        "Files have been written to the given extension folder".green()
    );
    Ok(())
}

/// Fetches the store record named `name`, downloads its assets into
/// `extension_root` and writes the config file. Returns the config file path.
///
/// Nothing is written to the config file unless every download succeeded.
pub fn pull_store_config(
    extension_root: &Path,
    name: &str,
    producer: &dyn ProducerApi,
    fetcher: &dyn AssetFetcher,
) -> Result<PathBuf> {
    // The store record is looked up by the local extension name.
    let store_extension = producer.extension_by_name(name).context("pull")?;
    log_debug!(
        "[Pull] Store record {} has id {}",
        store_extension.name.cyan(),
        store_extension.id
    );

    let images = producer
        .extension_images(store_extension.id)
        .context("pull")?;
    log_debug!("[Pull] {} store images to download", images.len());

    // Downloads happen inside the assembler. The config is only written once all of them succeeded.
    let config =
        assemble_config(extension_root, &store_extension, &images, fetcher).context("pull")?;
    let written = write_config(extension_root, &config).context("pull")?;

    log_info!(
        "[Pull] Wrote {}",
        written.display().to_string().green()
    );
    Ok(written)
}
