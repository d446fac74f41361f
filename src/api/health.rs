use crate::config::Config;
use crate::store::RecordStore;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::error;

/// Liveness probe: pings the active record store
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Store reachable", body = Object, example = json!({
            "success": true,
            "status": "ok",
            "backend": "filesystem"
        })),
        (status = 500, description = "Store unreachable")
    ),
    tag = "Health"
)]
pub async fn health(
    store: web::Data<RecordStore>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    match store.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "status": "ok",
            "backend": store.backend_name()
        }))),
        Err(e) => {
            error!(error = %e, backend = store.backend_name(), "Health check failed");
            Ok(e.to_response(!config.production))
        }
    }
}
