use crate::errors::AppError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Local-disk photo store. Files land next to the JSON records as
/// `foto_<millis><ext>`; the returned reference is the `/absensi/...` path the
/// routes mount for this backend.
pub struct LocalBlobStore {
    dir: PathBuf,
}

impl LocalBlobStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn put(&self, original_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        fs::create_dir_all(&self.dir)?;

        let ext = original_name
            .rfind('.')
            .map(|i| original_name[i..].to_ascii_lowercase())
            .unwrap_or_default();

        let mut stamp = Utc::now().timestamp_millis() as u64;
        let mut file_name = format!("foto_{stamp}{ext}");
        while self.dir.join(&file_name).exists() {
            stamp += 1;
            file_name = format!("foto_{stamp}{ext}");
        }

        fs::write(self.dir.join(&file_name), bytes)?;
        Ok(format!("/absensi/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_writes_file_and_returns_servable_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(tmp.path());

        let reference = store.put("Pagi Shift.PNG", vec![1, 2, 3]).unwrap();
        assert!(reference.starts_with("/absensi/foto_"));
        assert!(reference.ends_with(".png"));

        let file_name = reference.strip_prefix("/absensi/").unwrap();
        assert_eq!(fs::read(tmp.path().join(file_name)).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn put_without_extension_still_stores() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(tmp.path());

        let reference = store.put("photo", vec![9]).unwrap();
        let file_name = reference.strip_prefix("/absensi/").unwrap();
        assert!(file_name.starts_with("foto_"));
        assert!(tmp.path().join(file_name).exists());
    }
}
