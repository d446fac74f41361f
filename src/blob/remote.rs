use crate::blob::sanitize_filename;
use crate::errors::AppError;
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;

/// HTTP object-storage client. Uploads go as a bearer-authenticated PUT with a
/// fixed (non-randomized) key; the store answers with the public URL used as
/// the photo reference.
pub struct RemoteBlobStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

impl RemoteBlobStore {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    pub async fn put(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let key = format!(
            "{}_{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(original_name)
        );
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), key);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .query(&[("addRandomSuffix", "0")])
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::Unreachable(e.to_string())
                } else {
                    AppError::Blob(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::AuthRejected(format!(
                "blob store answered {status} for {key}"
            )));
        }
        if !status.is_success() {
            return Err(AppError::Blob(format!(
                "blob store answered {status} for {key}"
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::Blob(e.to_string()))?;
        Ok(body.url)
    }
}
