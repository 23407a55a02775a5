use crate::libs::errors::ExtensionError;
use std::path::PathBuf;

/// Resolves paths that start with a tilde `~` to the user's home directory.
/// Paths without a leading `~` are returned unchanged.
///
/// # Arguments
/// * `path`: A string slice (`&str`) representing the path, which might start with `~`.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Turns the user supplied extension path into an absolute one, relative to
/// the current working directory. The path does not have to exist yet; the
/// extension locator reports missing descriptors.
pub fn absolute_path(path: &str) -> Result<PathBuf, ExtensionError> {
    std::path::absolute(expand_tilde(path)).map_err(|cause| ExtensionError::Path {
        path: path.to_string(),
        cause,
    })
}
