use anyhow::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Lists the regular files in the font source directory.
///
/// Entries are sorted by file name so the vendored module order does not
/// depend on platform readdir order. The downstream link step must consume
/// the generated modules in this exact order, since the offset map is
/// computed against it.
pub fn scan_font_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read font directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
