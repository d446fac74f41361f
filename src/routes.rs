use crate::api::{absensi, export, health, pages};
use crate::config::{BlobBackend, Config};
use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // The photo field is capped at 5MB; leave headroom for the text fields.
    cfg.app_data(
        MultipartFormConfig::default()
            .memory_limit(8 * 1024 * 1024)
            .total_limit(10 * 1024 * 1024),
    );

    // Pages
    cfg.route("/", web::get().to(pages::dashboard))
        .route("/dashboard", web::get().to(pages::dashboard))
        .route("/absen", web::get().to(pages::absen));

    // Form intake + API
    cfg.route("/submit-absensi", web::post().to(absensi::submit))
        .service(
            web::scope("/api")
                .service(web::resource("/absensi").route(web::get().to(absensi::list)))
                .service(
                    web::resource("/export-excel").route(web::get().to(export::export_excel)),
                )
                .service(web::resource("/health").route(web::get().to(health::health))),
        );

    // Locally stored photos are served straight from the data directory.
    if config.blob_backend == BlobBackend::Local {
        cfg.service(Files::new("/absensi", &config.data_dir));
    }
}
