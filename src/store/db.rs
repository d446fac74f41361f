use crate::errors::AppError;
use crate::model::record::{AttendanceRecord, NewAttendance};
use chrono::NaiveDateTime;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{FromRow, MySqlPool};

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS absensi (
    id            BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    timestamp     DATETIME(3)     NOT NULL,
    nama          VARCHAR(255)    NOT NULL,
    area          VARCHAR(255)    NOT NULL,
    jenis         VARCHAR(255)    NOT NULL,
    waktu_mulai   VARCHAR(32)     NOT NULL,
    waktu_selesai VARCHAR(32)     NOT NULL,
    deskripsi     TEXT            NOT NULL,
    foto          VARCHAR(1024)   NOT NULL,
    created_at    DATETIME(3)     NOT NULL DEFAULT CURRENT_TIMESTAMP(3),
    INDEX idx_absensi_timestamp (timestamp)
)
"#;

/// MySQL-backed record store. The pool is built once at startup and shared by
/// handlers through `web::Data`; listing sorts server-side on the timestamp
/// column.
pub struct DbStore {
    pool: MySqlPool,
}

#[derive(FromRow)]
struct DbRow {
    id: u64,
    timestamp: NaiveDateTime,
    nama: String,
    area: String,
    jenis: String,
    waktu_mulai: String,
    waktu_selesai: String,
    deskripsi: String,
    foto: String,
    created_at: NaiveDateTime,
}

impl From<DbRow> for AttendanceRecord {
    fn from(row: DbRow) -> Self {
        AttendanceRecord {
            id: row.id,
            timestamp: row.timestamp.and_utc(),
            nama: row.nama,
            area: row.area,
            jenis: row.jenis,
            waktu_mulai: row.waktu_mulai,
            waktu_selesai: row.waktu_selesai,
            deskripsi: row.deskripsi,
            foto: row.foto,
            created_at: Some(row.created_at.and_utc()),
        }
    }
}

impl DbStore {
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = MySqlPoolOptions::new()
            .min_connections(5)
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(classify)?;

        sqlx::query(CREATE_TABLE_SQL)
            .execute(&pool)
            .await
            .map_err(classify)?;

        Ok(Self { pool })
    }

    pub async fn insert(&self, new: NewAttendance) -> Result<AttendanceRecord, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO absensi
            (timestamp, nama, area, jenis, waktu_mulai, waktu_selesai, deskripsi, foto)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.timestamp.naive_utc())
        .bind(&new.nama)
        .bind(&new.area)
        .bind(&new.jenis)
        .bind(&new.waktu_mulai)
        .bind(&new.waktu_selesai)
        .bind(&new.deskripsi)
        .bind(&new.foto)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        let id = result.last_insert_id();

        let row: DbRow = sqlx::query_as(
            r#"
            SELECT id, timestamp, nama, area, jenis, waktu_mulai, waktu_selesai,
                   deskripsi, foto, created_at
            FROM absensi
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(row.into())
    }

    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        let rows: Vec<DbRow> = sqlx::query_as(
            r#"
            SELECT id, timestamp, nama, area, jenis, waktu_mulai, waktu_selesai,
                   deskripsi, foto, created_at
            FROM absensi
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }
}

/// Attach the error kind where the failure happens instead of inspecting
/// message text downstream. SQLSTATE 28000 is MySQL's access-denied class.
fn classify(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => AppError::Unreachable(e.to_string()),
        sqlx::Error::Configuration(_) => AppError::ConfigMissing(e.to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("28000") => {
            AppError::AuthRejected(e.to_string())
        }
        _ => AppError::Db(e),
    }
}
