//! Path resolution for store discovery

use std::env;
use std::path::{Path, PathBuf};

/// Explicit `--root`, else the current directory, else "."
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve a `--store` value against the root when it is relative
pub fn resolve_store_path(root: &Path, store: &Path) -> PathBuf {
    if store.is_absolute() {
        store.to_path_buf()
    } else {
        root.join(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_path() {
        let explicit = PathBuf::from("/tmp/test/path");
        assert_eq!(resolve_root_path(Some(explicit.clone())), explicit);
    }

    #[test]
    fn test_resolve_store_path() {
        let root = Path::new("/work");
        assert_eq!(
            resolve_store_path(root, Path::new("grades")),
            PathBuf::from("/work/grades")
        );
        assert_eq!(
            resolve_store_path(root, Path::new("/elsewhere")),
            PathBuf::from("/elsewhere")
        );
    }
}
