use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single attendance entry. Records are written once and never updated or
/// deleted; the JSON field names match the submission form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    /// Assigned by the store: epoch millis for the filesystem backend,
    /// auto-increment id for the database backend.
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "2025-01-15T08:30:00Z", value_type = String)]
    pub timestamp: DateTime<Utc>,
    #[schema(example = "Budi Santoso")]
    pub nama: String,
    #[schema(example = "Gudang A")]
    pub area: String,
    #[schema(example = "Pembersihan")]
    pub jenis: String,
    #[serde(rename = "waktuMulai")]
    #[schema(example = "08:00")]
    pub waktu_mulai: String,
    #[serde(rename = "waktuSelesai")]
    #[schema(example = "10:30")]
    pub waktu_selesai: String,
    pub deskripsi: String,
    /// Photo reference: a `/absensi/...` path for the local blob backend or a
    /// full URL for the remote one.
    pub foto: String,
    /// Server-assigned, database backend only.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated submission, ready to be persisted. The photo has already been
/// handed to the blob store at this point.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub timestamp: DateTime<Utc>,
    pub nama: String,
    pub area: String,
    pub jenis: String,
    pub waktu_mulai: String,
    pub waktu_selesai: String,
    pub deskripsi: String,
    pub foto: String,
}
