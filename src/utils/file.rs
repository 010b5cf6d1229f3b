use eyre::{Result, WrapErr};
use log::info;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Writes `contents` to `path`, creating any missing parent directories.
///
/// # Errors
/// * If a parent directory cannot be created
/// * If the file cannot be written
pub fn write_creating_parents<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

/// Empties a consumed input file, leaving it in place.
///
/// The simulation appends to the same file on its next run, so an empty
/// file marks "nothing new to process".
///
/// # Errors
/// * If the file cannot be opened for writing
pub fn truncate<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to truncate {}", path.display()))?;
    info!("file::truncate: Contents of file at {} cleared", path.display());
    Ok(())
}
