// Serializes the assembled store config and writes it into the extension root.

use crate::libs::errors::ConfigError;
use crate::libs::utilities::file_operations::write_permissive;
use crate::log_debug;
use crate::schemas::extension_config::ExtensionConfig;
use std::path::{Path, PathBuf};

/// Name of the store config inside the extension root.
pub const CONFIG_FILE_NAME: &str = ".shopware-extension.yml";

/// Renders the config as YAML. Unset optional fields do not appear at all.
pub fn serialize_config(config: &ExtensionConfig) -> Result<String, ConfigError> {
    serde_yaml::to_string(config).map_err(ConfigError::Serialize)
}

/// Writes `<extension_root>/.shopware-extension.yml`, replacing any existing file.
/// Returns the path that was written.
pub fn write_config(extension_root: &Path, config: &ExtensionConfig) -> Result<PathBuf, ConfigError> {
    let content = serialize_config(config)?;
    let path = extension_root.join(CONFIG_FILE_NAME);

    write_permissive(&path, content.as_bytes()).map_err(|cause| ConfigError::Write {
        path: path.clone(),
        cause,
    })?;

    log_debug!("[Config] Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}
