//! Copying the bundled static files next to the generated page
//!
//! Only `style.css` ships in `dependencies/`. The page also loads
//! `custom_antismash.js` and `jquery.js`, which have to be added to the asset
//! directory by hand (see the README).

use crate::error::{GatherError, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copies every file directly inside `assets_dir` into `output_dir`,
/// overwriting files of the same name. Returns the number of files copied.
///
/// A missing asset directory copies nothing.
pub fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize> {
    if !assets_dir.is_dir() {
        log::warn!("Asset directory not found: {}", assets_dir.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| GatherError::io(assets_dir, e.into()))?;
        let source = entry.path();
        if !source.is_file() {
            log::debug!("Not copying {}: not a file", source.display());
            continue;
        }
        let target = output_dir.join(entry.file_name());
        fs::copy(source, &target).map_err(|e| GatherError::io(&target, e))?;
        copied += 1;
    }

    log::debug!("Copied {} asset file(s) from {}", copied, assets_dir.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_and_overwrites() {
        let assets = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("style.css"), "body {}").unwrap();
        fs::write(assets.path().join("jquery.js"), "// jq").unwrap();
        fs::create_dir(assets.path().join("nested")).unwrap();
        fs::write(out.path().join("style.css"), "old").unwrap();

        assert_eq!(copy_assets(assets.path(), out.path()).unwrap(), 2);
        assert_eq!(fs::read_to_string(out.path().join("style.css")).unwrap(), "body {}");
        assert!(out.path().join("jquery.js").is_file());
        assert!(!out.path().join("nested").exists());
    }

    #[test]
    fn test_missing_assets_dir() {
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("nope");
        assert_eq!(copy_assets(&missing, out.path()).unwrap(), 0);
    }
}
