// Register application subcommands.
// Each module corresponds to a specific command-line action.

// Generates `.shopware-extension.yml` from the account's store data.
pub mod pull;
