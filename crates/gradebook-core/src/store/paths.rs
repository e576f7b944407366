use std::path::{Path, PathBuf};

use crate::error::{GradeError, Result};

/// Store directory created under the project root
pub const DEFAULT_STORE_DIR: &str = ".gradebook";

/// Config file inside the store
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` looking for a store directory
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(GradeError::StoreNotFound {
                    path: root.join(DEFAULT_STORE_DIR),
                });
            }
        }
    }
}
