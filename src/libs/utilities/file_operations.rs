use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Writes `content` to `path`, truncating an existing file.
/// New files are created with a permissive mode (0o777, reduced by the umask) on Unix.
pub fn write_permissive(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o777);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;
    Ok(())
}
