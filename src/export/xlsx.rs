use crate::errors::AppError;
use crate::model::record::AttendanceRecord;
use chrono::{DateTime, Datelike, Local, Utc};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub const HEADERS: [&str; 10] = [
    "No",
    "Tanggal",
    "Waktu",
    "Nama",
    "Area",
    "Jenis Pekerjaan",
    "Waktu Mulai",
    "Waktu Selesai",
    "Deskripsi",
    "URL Foto",
];

// Fixed widths, tuned for readability rather than content.
const COLUMN_WIDTHS: [f64; 10] = [5.0, 20.0, 12.0, 30.0, 15.0, 18.0, 12.0, 12.0, 40.0, 50.0];

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// "15 Januari 2025", in server-local time.
pub fn format_tanggal(timestamp: &DateTime<Utc>) -> String {
    let local = timestamp.with_timezone(&Local);
    format!(
        "{:02} {} {}",
        local.day(),
        BULAN[local.month0() as usize],
        local.year()
    )
}

/// "08:30:00", in server-local time.
pub fn format_waktu(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Render the records into an in-memory `.xlsx` workbook, one row per record.
pub fn render_xlsx(records: &[AttendanceRecord]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Data Absensi")
        .map_err(to_export_error)?;

    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet
            .write(row, 0, (index + 1) as u32)
            .map_err(to_export_error)?;

        let cells = [
            format_tanggal(&record.timestamp),
            format_waktu(&record.timestamp),
            record.nama.clone(),
            record.area.clone(),
            record.jenis.clone(),
            record.waktu_mulai.clone(),
            record.waktu_selesai.clone(),
            record.deskripsi.clone(),
            record.foto.clone(),
        ];
        for (offset, value) in cells.into_iter().enumerate() {
            worksheet
                .write(row, (offset + 1) as u16, value)
                .map_err(to_export_error)?;
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn to_export_error(e: XlsxError) -> AppError {
    AppError::Export(e.to_string())
}
