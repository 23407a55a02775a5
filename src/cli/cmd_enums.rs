use crate::libs::account_client::DEFAULT_API_URL;
use crate::libs::config_loading::AccountOverrides;
use clap::{Args, Parser, Subcommand};

/// Defines the command-line interface (CLI) for 'shopware-store-pull'.
/// `#[derive(Parser)]` automatically generates argument parsing code via `clap`.
#[derive(Parser, Debug)]
#[command(name = "shopware-store-pull", version)]
#[command(about = "Generates local store configuration from Shopware account data")]
pub struct Cli {
    /// Enables detailed debug output for troubleshooting.
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,

    /// Path to the CLI config file holding account credentials
    /// (defaults to <config dir>/shopware-cli/shopware-cli.yml).
    #[arg(long, global = true, env = "SHOPWARE_CLI_CONFIG")]
    pub(crate) config: Option<String>,

    #[command(flatten)]
    pub(crate) account: AccountArgs,

    /// Base URL of the account API.
    #[arg(long, global = true, hide = true, env = "SHOPWARE_CLI_API_URL", default_value = DEFAULT_API_URL)]
    pub(crate) api_url: String,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Account login options; each one falls back to the config file when absent.
#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Shopware account email.
    #[arg(long = "account-email", global = true, env = "SHOPWARE_CLI_ACCOUNT_EMAIL")]
    pub(crate) email: Option<String>,

    /// Shopware account password.
    #[arg(
        long = "account-password",
        global = true,
        env = "SHOPWARE_CLI_ACCOUNT_PASSWORD",
        hide_env_values = true
    )]
    pub(crate) password: Option<String>,

    /// Id of the company to act for (defaults to the first membership).
    #[arg(long = "account-company", global = true, env = "SHOPWARE_CLI_ACCOUNT_COMPANY")]
    pub(crate) company: Option<u64>,
}

impl From<AccountArgs> for AccountOverrides {
    fn from(args: AccountArgs) -> Self {
        Self {
            email: args.email,
            password: args.password,
            company: args.company,
        }
    }
}

/// Enumerates all supported subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates `.shopware-extension.yml` and downloads store images from account data.
    Pull {
        /// Path to the extension folder (app or platform plugin).
        path: String,
    },
}
