pub mod db;
pub mod fs;

pub use db::DbStore;
pub use fs::FsStore;

use crate::config::{Config, StorageBackend};
use crate::errors::AppError;
use crate::model::record::{AttendanceRecord, NewAttendance};

/// Record persistence, selected by configuration. Both backends share the same
/// contract: `insert` returns the stored record with its assigned id, and
/// `list_all` returns every record sorted by timestamp descending.
pub enum RecordStore {
    Fs(FsStore),
    Db(DbStore),
}

impl RecordStore {
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        match config.storage_backend {
            StorageBackend::Filesystem => Ok(Self::Fs(FsStore::new(&config.data_dir))),
            StorageBackend::Database => {
                let url = config.database_url.as_deref().ok_or_else(|| {
                    AppError::ConfigMissing(
                        "DATABASE_URL must be set when STORAGE_BACKEND=database".to_string(),
                    )
                })?;
                Ok(Self::Db(DbStore::connect(url).await?))
            }
        }
    }

    pub async fn insert(&self, new: NewAttendance) -> Result<AttendanceRecord, AppError> {
        match self {
            Self::Fs(store) => store.insert(new),
            Self::Db(store) => store.insert(new).await,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        match self {
            Self::Fs(store) => store.list_all(),
            Self::Db(store) => store.list_all().await,
        }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Self::Fs(store) => store.ping(),
            Self::Db(store) => store.ping().await,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Fs(_) => "filesystem",
            Self::Db(_) => "database",
        }
    }
}
