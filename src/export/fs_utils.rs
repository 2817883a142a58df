// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check that the report files can be created or overwritten.
///
/// - No file exists → Ok
/// - Some exist and `force` is set → Ok
/// - Some exist and `force == false` → ask the user once for all of them.
pub(crate) fn ensure_writable(paths: &[PathBuf], force: bool) -> AppResult<()> {
    let existing: Vec<&PathBuf> = paths.iter().filter(|p| p.exists()).collect();
    if existing.is_empty() || force {
        return Ok(());
    }

    for p in &existing {
        warning(format!("The file '{}' already exists.", p.display()));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing files will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing files not overwritten".to_string(),
        ))
    }
}

/// Create the report directory (and parents) if missing.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        info(format!("Created output directory: {}", dir.display()));
    }
    Ok(())
}
