use crate::errors::AppError;
use crate::model::record::{AttendanceRecord, NewAttendance};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed record store: one pretty-printed JSON file per record,
/// named `absensi_<millis>.json`. Listing re-reads and parses every file in
/// the directory on each call; there is no index or cache.
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn insert(&self, new: NewAttendance) -> Result<AttendanceRecord, AppError> {
        fs::create_dir_all(&self.dir)?;

        // Write-time millis double as the record id; bump on collision so two
        // submissions landing in the same millisecond both get a file.
        let mut id = Utc::now().timestamp_millis() as u64;
        let mut path = self.record_path(id);
        while path.exists() {
            id += 1;
            path = self.record_path(id);
        }

        let record = AttendanceRecord {
            id,
            timestamp: new.timestamp,
            nama: new.nama,
            area: new.area,
            jenis: new.jenis,
            waktu_mulai: new.waktu_mulai,
            waktu_selesai: new.waktu_selesai,
            deskripsi: new.deskripsi,
            foto: new.foto,
            created_at: None,
        };

        fs::write(&path, serde_json::to_vec_pretty(&record)?)?;
        Ok(record)
    }

    pub fn list_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            records.push(serde_json::from_str::<AttendanceRecord>(&contents)?);
        }

        // Stable sort, newest first.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    pub fn ping(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn record_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("absensi_{id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_attendance(nama: &str, hour: u32) -> NewAttendance {
        NewAttendance {
            timestamp: Utc.with_ymd_and_hms(2025, 1, 15, hour, 0, 0).unwrap(),
            nama: nama.to_string(),
            area: "Gudang A".to_string(),
            jenis: "Pembersihan".to_string(),
            waktu_mulai: "08:00".to_string(),
            waktu_selesai: "10:30".to_string(),
            deskripsi: "Membersihkan area gudang".to_string(),
            foto: "/absensi/foto_1.png".to_string(),
        }
    }

    #[test]
    fn list_on_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsStore::new(tmp.path().join("does-not-exist"));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn insert_writes_one_json_file_per_record() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsStore::new(tmp.path());

        let first = store.insert(new_attendance("Budi", 8)).unwrap();
        let second = store.insert(new_attendance("Siti", 9)).unwrap();
        assert_ne!(first.id, second.id);

        let files: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.starts_with("absensi_")));
        assert!(files.iter().all(|f| f.ends_with(".json")));
    }

    #[test]
    fn list_returns_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsStore::new(tmp.path());

        store.insert(new_attendance("t1", 8)).unwrap();
        store.insert(new_attendance("t3", 10)).unwrap();
        store.insert(new_attendance("t2", 9)).unwrap();

        let names: Vec<_> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.nama)
            .collect();
        assert_eq!(names, vec!["t3", "t2", "t1"]);
    }

    #[test]
    fn round_trip_preserves_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsStore::new(tmp.path());

        let inserted = store.insert(new_attendance("Budi", 8)).unwrap();
        let listed = store.list_all().unwrap();
        assert_eq!(listed.len(), 1);

        let got = &listed[0];
        assert_eq!(got.id, inserted.id);
        assert_eq!(got.timestamp, inserted.timestamp);
        assert_eq!(got.nama, "Budi");
        assert_eq!(got.waktu_mulai, "08:00");
        assert_eq!(got.waktu_selesai, "10:30");
        assert_eq!(got.deskripsi, "Membersihkan area gudang");
        assert_eq!(got.foto, "/absensi/foto_1.png");
        assert!(got.created_at.is_none());
    }
}
