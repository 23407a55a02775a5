// Data structures (schemas) for everything the tool reads or writes.

// The CLI's own config file with account credentials.
pub mod cli_config;
// `.shopware-extension.yml`, the generated local store configuration.
pub mod extension_config;
// Responses of the Shopware account API.
pub mod store;
