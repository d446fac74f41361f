use crate::model::record::AttendanceRecord;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Absensi API",
        version = "1.0.0",
        description = r#"
## Attendance logging backend

Field workers submit an attendance form (name, area, task type, time window,
description, photo); records are listed newest-first and can be exported to a
spreadsheet.

### Storage
- `STORAGE_BACKEND=filesystem` — one JSON file per record, photos on local disk
- `STORAGE_BACKEND=database` — MySQL table, photos in a remote object store

### Response format
JSON envelopes of the shape `{"success": bool, ...}`.
"#,
    ),
    paths(
        crate::api::absensi::submit,
        crate::api::absensi::list,
        crate::api::export::export_excel,
        crate::api::health::health
    ),
    components(schemas(AttendanceRecord)),
    tags(
        (name = "Absensi", description = "Attendance submission, listing and export"),
        (name = "Health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;
