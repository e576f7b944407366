//! Store management for gradebook
//!
//! The store is the directory holding the configuration and the SQLite
//! database. Default location: `.gradebook/` under the project root.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{GradeError, Result};
use crate::gradebook::Gradebook;
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// An opened gradebook store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(GradeError::StoreNotFound {
                path: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let db = Database::open(&path.join(&config.database), config.wal)?;

        Ok(Store {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit store root path. Idempotent: an
    /// existing config and database are kept as they are.
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        if !config_path.exists() {
            StoreConfig::default().save(&config_path)?;
            tracing::info!(path = %config_path.display(), "wrote default config");
        }

        Self::open(store_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Orchestrator over this store's database using the wall clock
    pub fn gradebook(&mut self) -> Gradebook<&mut Database> {
        Gradebook::with_system_clock(&mut self.db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NewStudent, Scores};
    use crate::repository::Repository;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_layout() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path()).unwrap();

        assert_eq!(store.root(), dir.path().join(DEFAULT_STORE_DIR));
        assert!(store.root().join(CONFIG_FILE).is_file());
        assert!(store.root().join("gradebook.db").is_file());
        assert_eq!(store.config(), &StoreConfig::default());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempdir().unwrap();
        let store_root = dir.path().join(DEFAULT_STORE_DIR);
        fs::create_dir_all(&store_root).unwrap();
        fs::write(store_root.join(CONFIG_FILE), "report_threshold = 70.0\n").unwrap();

        let store = Store::init(dir.path()).unwrap();
        assert_eq!(store.config().report_threshold, 70.0);
    }

    #[test]
    fn test_open_missing_store() {
        let dir = tempdir().unwrap();
        let err = Store::open(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, GradeError::StoreNotFound { .. }));
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempdir().unwrap();
        Store::init(dir.path()).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let store = Store::discover(&nested).unwrap();
        assert_eq!(store.root(), dir.path().join(DEFAULT_STORE_DIR));
    }

    #[test]
    fn test_gradebook_writes_through_to_database() {
        let dir = tempdir().unwrap();
        {
            let mut store = Store::init(dir.path()).unwrap();
            store
                .gradebook()
                .add(NewStudent::new("s1", "Kim", Scores::new(90, 90, 90)))
                .unwrap();
        }

        let store = Store::discover(dir.path()).unwrap();
        let record = store.db().get("s1").unwrap().unwrap();
        assert_eq!(record.rank(), 1);
    }
}
