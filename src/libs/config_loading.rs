// Loads the CLI config file and merges it with command line / environment values.

use crate::libs::account_client::AccountCredentials;
use crate::libs::errors::{AccountError, ConfigError};
use crate::libs::utilities::path_helpers::expand_tilde;
use crate::schemas::cli_config::CliConfig;
use crate::{log_debug, log_warn};
use colored::Colorize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Default location below the platform config directory.
const DEFAULT_CONFIG_FILE: &str = "shopware-cli/shopware-cli.yml";

/// Account values given on the command line or through `SHOPWARE_CLI_ACCOUNT_*`.
#[derive(Debug, Default, Clone)]
pub struct AccountOverrides {
    pub email: Option<String>,
    pub password: Option<String>,
    pub company: Option<u64>,
}

/// Resolves the config file path: the explicit one, or the default under the user's config dir.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(expand_tilde(path)),
        None => dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE)),
    }
}

/// Reads the CLI config. A missing file yields the empty default; an unreadable
/// or malformed file is an error.
pub fn load_cli_config(path: Option<&PathBuf>) -> Result<CliConfig, ConfigError> {
    let Some(path) = path else {
        log_warn!("[Config] Could not determine a config directory, relying on flags and environment.");
        return Ok(CliConfig::default());
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log_debug!(
                "[Config] No config file at {}, relying on flags and environment.",
                path.display().to_string().yellow()
            );
            return Ok(CliConfig::default());
        }
        Err(cause) => {
            return Err(ConfigError::Read {
                path: path.clone(),
                cause,
            });
        }
    };

    let config = serde_yaml::from_str(&content).map_err(|cause| ConfigError::Parse {
        path: path.clone(),
        cause,
    })?;
    log_debug!("[Config] Loaded {}", path.display().to_string().green());
    Ok(config)
}

/// Merges overrides over file values. Email and password are required.
pub fn resolve_credentials(
    config: &CliConfig,
    overrides: &AccountOverrides,
) -> Result<AccountCredentials, AccountError> {
    let email = overrides
        .email
        .clone()
        .or_else(|| config.account.email.clone())
        .filter(|email| !email.is_empty())
        .ok_or(AccountError::MissingCredentials(
            "account.email or SHOPWARE_CLI_ACCOUNT_EMAIL",
        ))?;
    let password = overrides
        .password
        .clone()
        .or_else(|| config.account.password.clone())
        .filter(|password| !password.is_empty())
        .ok_or(AccountError::MissingCredentials(
            "account.password or SHOPWARE_CLI_ACCOUNT_PASSWORD",
        ))?;

    Ok(AccountCredentials {
        email,
        password,
        company: overrides.company.or(config.account.company),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::cli_config::AccountConfig;

    fn file_config() -> CliConfig {
        CliConfig {
            account: AccountConfig {
                email: Some("file@example.com".to_string()),
                password: Some("file-secret".to_string()),
                company: Some(7),
            },
        }
    }

    #[test]
    fn missing_file_gives_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopware-cli.yml");

        let config = load_cli_config(Some(&path)).unwrap();

        assert!(config.account.email.is_none());
    }

    #[test]
    fn reads_account_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopware-cli.yml");
        fs::write(
            &path,
            "account:\n  email: dev@example.com\n  password: secret\n  company: 1234\nother: ignored\n",
        )
        .unwrap();

        let config = load_cli_config(Some(&path)).unwrap();

        assert_eq!(config.account.email.as_deref(), Some("dev@example.com"));
        assert_eq!(config.account.company, Some(1234));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopware-cli.yml");
        fs::write(&path, "account: [unclosed").unwrap();

        assert!(matches!(
            load_cli_config(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let overrides = AccountOverrides {
            email: Some("flag@example.com".to_string()),
            password: None,
            company: Some(9),
        };

        let credentials = resolve_credentials(&file_config(), &overrides).unwrap();

        assert_eq!(credentials.email, "flag@example.com");
        assert_eq!(credentials.password, "file-secret");
        assert_eq!(credentials.company, Some(9));
    }

    #[test]
    fn missing_password_is_reported() {
        let overrides = AccountOverrides {
            email: Some("flag@example.com".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            resolve_credentials(&CliConfig::default(), &overrides),
            Err(AccountError::MissingCredentials(_))
        ));
    }

    #[test]
    fn explicit_config_path_is_used() {
        assert_eq!(
            resolve_config_path(Some("/etc/sw.yml")),
            Some(PathBuf::from("/etc/sw.yml"))
        );
    }
}
