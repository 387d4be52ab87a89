//! Deterministic directory walk
//!
//! `spec.md` §4.3 requires files in "directory walk order" — `WalkDir`
//! with `sort_by_file_name` gives a stable, reproducible ordering
//! across platforms and runs, which plain readdir does not guarantee.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CloneError;
use crate::shared::ports::TokenizerRegistry;

/// List every regular file under `root` accepted by `registry`, in
/// deterministic (sorted, depth-first) order.
pub fn walk_source_files(
    root: &Path,
    registry: &TokenizerRegistry,
) -> Result<Vec<PathBuf>, CloneError> {
    if !root.exists() {
        return Err(CloneError::Source(format!(
            "source root does not exist: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| CloneError::Source(e.to_string()))?;
        if entry.file_type().is_file() && registry.accepts(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ports::Language;

    #[test]
    fn test_missing_root_is_source_error() {
        let registry = TokenizerRegistry::for_language(Language::Python);
        let err = walk_source_files(Path::new("/no/such/dir/at/all"), &registry).unwrap_err();
        assert!(matches!(err, CloneError::Source(_)));
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.py"), "def f(): pass").unwrap();
        std::fs::write(dir.path().join("b.txt"), "not python").unwrap();

        let registry = TokenizerRegistry::for_language(Language::Python);
        let files = walk_source_files(dir.path(), &registry).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "a.py");
    }
}
