use crate::blob::BlobStore;
use crate::config::Config;
use crate::errors::AppError;
use crate::model::record::NewAttendance;
use crate::store::RecordStore;
use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes as UploadBytes;
use actix_multipart::form::text::Text;
use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::error;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];
const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Multipart submission form. Everything is optional at the extractor level so
/// missing fields surface as a handler-level 400 with a readable message; the
/// photo size cap is enforced by the multipart layer itself.
#[derive(MultipartForm)]
pub struct SubmitForm {
    pub nama: Option<Text<String>>,
    pub area: Option<Text<String>>,
    pub jenis: Option<Text<String>>,
    #[multipart(rename = "waktuMulai")]
    pub waktu_mulai: Option<Text<String>>,
    #[multipart(rename = "waktuSelesai")]
    pub waktu_selesai: Option<Text<String>>,
    pub desc: Option<Text<String>>,
    pub timestamp: Option<Text<String>>,
    #[multipart(limit = "5MiB")]
    pub foto: Option<UploadBytes>,
}

fn text(field: &Option<Text<String>>) -> Option<String> {
    field
        .as_ref()
        .map(|t| t.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Create an attendance record
#[utoipa::path(
    post,
    path = "/submit-absensi",
    responses(
        (status = 200, description = "Record stored", body = Object, example = json!({
            "success": true,
            "message": "Attendance recorded",
            "data": {"id": 1}
        })),
        (status = 400, description = "Missing field, missing photo or bad file type", body = Object, example = json!({
            "success": false,
            "message": "All fields are required"
        })),
        (status = 500, description = "Storage error")
    ),
    tag = "Absensi"
)]
pub async fn submit(
    MultipartForm(form): MultipartForm<SubmitForm>,
    store: web::Data<RecordStore>,
    blob: web::Data<BlobStore>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let verbose = !config.production;

    let (Some(nama), Some(area), Some(jenis), Some(waktu_mulai), Some(waktu_selesai), Some(deskripsi)) = (
        text(&form.nama),
        text(&form.area),
        text(&form.jenis),
        text(&form.waktu_mulai),
        text(&form.waktu_selesai),
        text(&form.desc),
    ) else {
        return Ok(
            AppError::Validation("All fields are required".to_string()).to_response(verbose)
        );
    };

    let Some(foto) = form.foto else {
        return Ok(AppError::Validation("A photo must be uploaded".to_string())
            .to_response(verbose));
    };

    let file_name = foto.file_name.clone().unwrap_or_default();
    let extension_ok = file_name
        .rfind('.')
        .map(|i| file_name[i + 1..].to_ascii_lowercase())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
    let mime_ok = foto
        .content_type
        .as_ref()
        .is_some_and(|m| ALLOWED_MIME_TYPES.contains(&m.essence_str()));
    if !extension_ok || !mime_ok {
        return Ok(AppError::Validation(
            "Only image files (jpeg, jpg, png, gif) are allowed".to_string(),
        )
        .to_response(verbose));
    }

    // Absent timestamp defaults to now; a present but unparseable one is a
    // client error, since it would silently change the record's sort key.
    let timestamp = match text(&form.timestamp) {
        Some(raw) => match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(_) => {
                return Ok(AppError::Validation(
                    "timestamp must be an RFC 3339 instant".to_string(),
                )
                .to_response(verbose));
            }
        },
        None => Utc::now(),
    };

    let content_type = foto
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    // Two independent writes; a record-write failure after a successful blob
    // write leaves the photo behind.
    let foto_ref = match blob.put(&file_name, &content_type, foto.data.to_vec()).await {
        Ok(reference) => reference,
        Err(e) => {
            error!(error = %e, file_name = %file_name, "Failed to store photo");
            return Ok(e.to_response(verbose));
        }
    };

    let new = NewAttendance {
        timestamp,
        nama,
        area,
        jenis,
        waktu_mulai,
        waktu_selesai,
        deskripsi,
        foto: foto_ref,
    };

    match store.insert(new).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Attendance recorded",
            "data": record
        }))),
        Err(e) => {
            error!(error = %e, "Failed to persist attendance record");
            Ok(e.to_response(verbose))
        }
    }
}

/// List all attendance records, newest first
#[utoipa::path(
    get,
    path = "/api/absensi",
    responses(
        (status = 200, description = "All records, timestamp descending", body = Object, example = json!({
            "success": true,
            "data": []
        })),
        (status = 500, description = "Storage error")
    ),
    tag = "Absensi"
)]
pub async fn list(
    store: web::Data<RecordStore>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    match store.list_all().await {
        Ok(records) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": records
        }))),
        Err(e) => {
            error!(error = %e, "Failed to list attendance records");
            Ok(e.to_response(!config.production))
        }
    }
}
