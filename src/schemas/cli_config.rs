// Schema of the optional CLI config file (`shopware-cli.yml`) holding account credentials.

use serde::{Deserialize, Serialize};

/// Root of the CLI config file. Unknown top-level sections are ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub account: AccountConfig,
}

/// Shopware account login, all fields optional so CLI flags and env vars can fill the gaps.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Company id to act for; the first membership is used when unset.
    pub company: Option<u64>,
}
