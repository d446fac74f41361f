//! Unified application error type.
//! Every error carries its kind from the point of failure, so handlers never
//! have to guess the cause from message text.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::json;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Request validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NoData(String),

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("configuration error: {0}")]
    ConfigMissing(String),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("storage backend unreachable: {0}")]
    Unreachable(String),

    #[error("storage backend rejected credentials: {0}")]
    AuthRejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Db(sqlx::Error),

    #[error("blob upload failed: {0}")]
    Blob(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("export failed: {0}")]
    Export(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NoData(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients regardless of runtime mode.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NoData(msg) => msg.clone(),
            AppError::ConfigMissing(_) => "Server configuration error".to_string(),
            AppError::Unreachable(_) => "Storage backend is unreachable".to_string(),
            AppError::AuthRejected(_) => {
                "Storage backend rejected the configured credentials".to_string()
            }
            _ => "Something went wrong while processing the request".to_string(),
        }
    }

    /// Build the JSON error response. `verbose` (non-production mode) adds the
    /// full error text as a `detail` field.
    pub fn to_response(&self, verbose: bool) -> HttpResponse {
        let mut body = json!({
            "success": false,
            "message": self.public_message(),
        });
        if verbose {
            body["detail"] = json!(self.to_string());
        }
        HttpResponse::build(self.status()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Validation("All fields are required".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "All fields are required");
    }

    #[test]
    fn no_data_maps_to_not_found() {
        let err = AppError::NoData("nothing to export".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_kinds_map_to_internal_error_with_generic_message() {
        for err in [
            AppError::Unreachable("connection refused".into()),
            AppError::AuthRejected("access denied".into()),
            AppError::ConfigMissing("DATABASE_URL".into()),
            AppError::Blob("upload failed".into()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!err.public_message().contains("connection refused"));
            assert!(!err.public_message().contains("access denied"));
        }
    }

    #[test]
    fn verbose_response_carries_detail() {
        let err = AppError::Unreachable("connection refused".into());
        let resp = err.to_response(true);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
