use eyre::{Result, WrapErr};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// The path the file would be renamed to, keeping its directory and
/// extension.
pub fn renamed_path(path: &Path, stem: &str) -> PathBuf {
    let file_name = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    };
    path.with_file_name(file_name)
}

/// Rename the files to the formatted track names, pairing them positionally.
///
/// Every rename is logged; with `dry_run` nothing touches the filesystem.
pub fn rename_files(files: &[PathBuf], tracks: &[String], dry_run: bool) -> Result<()> {
    for (path, track) in files.iter().zip(tracks.iter()) {
        let new_path = renamed_path(path, track);
        info!("{} => {}", path.display(), new_path.display());

        if !dry_run {
            fs::rename(path, &new_path)
                .wrap_err_with(|| format!("Could not rename {}", path.display()))?;
        }
    }

    Ok(())
}
