use std::fs;
use std::path::{Path, PathBuf};

/// Creates the directory that will hold `file` and returns it. A bare file
/// name resolves to the current directory.
pub fn ensure_parent_dir<P: AsRef<Path>>(file: P) -> std::io::Result<PathBuf> {
    let parent = match file.as_ref().parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.exists() {
        fs::create_dir_all(&parent)?;
    }
    Ok(parent)
}
