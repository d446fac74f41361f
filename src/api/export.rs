use crate::config::Config;
use crate::errors::AppError;
use crate::export::xlsx::render_xlsx;
use crate::store::RecordStore;
use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use tracing::error;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download all records as a spreadsheet
#[utoipa::path(
    get,
    path = "/api/export-excel",
    responses(
        (status = 200, description = "xlsx attachment, one row per record"),
        (status = 404, description = "No records to export", body = Object, example = json!({
            "success": false,
            "message": "No attendance data to export"
        })),
        (status = 500, description = "Storage or rendering error")
    ),
    tag = "Absensi"
)]
pub async fn export_excel(
    store: web::Data<RecordStore>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let verbose = !config.production;

    let records = match store.list_all().await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Failed to fetch records for export");
            return Ok(e.to_response(verbose));
        }
    };

    // Listing an empty store succeeds with []; exporting one is a 404.
    if records.is_empty() {
        return Ok(
            AppError::NoData("No attendance data to export".to_string()).to_response(verbose)
        );
    }

    let buffer = match render_xlsx(&records) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!(error = %e, "Failed to render spreadsheet");
            return Ok(e.to_response(verbose));
        }
    };

    let file_name = format!("Absensi_{}.xlsx", Local::now().format("%Y-%m-%d"));
    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(buffer))
}
