// Building blocks of the `pull` command.

// Login, company and producer lookups against the Shopware account API.
pub mod account_client;
// Store record -> `.shopware-extension.yml` mapping, including asset downloads.
pub mod config_assembler;
// CLI config file and credential resolution.
pub mod config_loading;
// Writes `.shopware-extension.yml`.
pub mod config_writer;
// Error types shared by all stages.
pub mod errors;
// Finds the extension (app or platform plugin) in a folder.
pub mod extension_locator;
// The shared HTTP agent.
pub mod http_client;
pub mod utilities;
