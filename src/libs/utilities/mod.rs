// Small helpers used across the pull pipeline.

// Asset downloads (`AssetFetcher`).
pub mod assets;
pub mod file_operations;
// `~` expansion and absolute paths.
pub mod path_helpers;
