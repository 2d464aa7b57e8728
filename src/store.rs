use super::Result;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Directory the `login` command writes into, relative to the working directory.
pub const CREDENTIALS_DIR: &str = "./credentials";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[cfg(unix)]
const CREDENTIALS_MODE: u32 = 0o744;

#[cfg(unix)]
fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.mode(CREDENTIALS_MODE);
    builder
}

#[cfg(not(unix))]
fn dir_builder() -> DirBuilder {
    DirBuilder::new()
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Ok(());
    }

    dir_builder().create(dir)?;

    log::debug!("Created credentials directory {}", dir.display());
    Ok(())
}

/// Writes `file_bytes` to `config.json` inside `dir`, creating `dir` if needed.
///
/// An existing file is truncated, never merged.
pub fn write_config(dir: impl AsRef<Path>, file_bytes: &[u8]) -> Result<PathBuf> {
    let dir = dir.as_ref();
    ensure_dir(dir)?;

    let path = dir.join(CONFIG_FILE_NAME);
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(CREDENTIALS_MODE);

    let mut file = options.open(&path)?;
    file.write_all(file_bytes)?;

    log::debug!("Wrote {} bytes to {}", file_bytes.len(), path.display());
    Ok(path)
}
