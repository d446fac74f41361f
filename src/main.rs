use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;

use absensi::blob::BlobStore;
use absensi::config::{BlobBackend, Config, StorageBackend};
use absensi::docs::ApiDoc;
use absensi::routes;
use absensi::store::RecordStore;

use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    // Fails fast on missing configuration or an unreachable database.
    let store = Data::new(RecordStore::from_config(&config).await?);
    let blob = Data::new(BlobStore::from_config(&config)?);

    if config.storage_backend == StorageBackend::Filesystem
        || config.blob_backend == BlobBackend::Local
    {
        std::fs::create_dir_all(&config.data_dir)?;
    }

    let port = config.port;
    info!(backend = store.backend_name(), port, "Server starting...");

    let config_data = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(blob.clone())
            .app_data(Data::new(config_data.clone()))
            .configure(|cfg| routes::configure(cfg, &config_data))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
