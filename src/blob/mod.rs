pub mod local;
pub mod remote;

pub use local::LocalBlobStore;
pub use remote::RemoteBlobStore;

use crate::config::{BlobBackend, Config};
use crate::errors::AppError;

/// Photo persistence, selected by configuration. `put` stores the uploaded
/// bytes and returns a stable reference: a servable local path or a remote
/// URL.
pub enum BlobStore {
    Local(LocalBlobStore),
    Remote(RemoteBlobStore),
}

impl BlobStore {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        match config.blob_backend {
            BlobBackend::Local => Ok(Self::Local(LocalBlobStore::new(&config.data_dir))),
            BlobBackend::Remote => {
                let base_url = config.blob_base_url.clone().ok_or_else(|| {
                    AppError::ConfigMissing(
                        "BLOB_BASE_URL must be set when BLOB_BACKEND=remote".to_string(),
                    )
                })?;
                let token = config.blob_token.clone().ok_or_else(|| {
                    AppError::ConfigMissing(
                        "BLOB_READ_WRITE_TOKEN must be set when BLOB_BACKEND=remote".to_string(),
                    )
                })?;
                Ok(Self::Remote(RemoteBlobStore::new(base_url, token)))
            }
        }
    }

    pub async fn put(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        match self {
            Self::Local(store) => store.put(original_name, bytes),
            Self::Remote(store) => store.put(original_name, content_type, bytes).await,
        }
    }
}

/// Collapse whitespace runs to `_`, drop everything outside
/// `[A-Za-z0-9._-]`, lowercase the rest.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c.to_ascii_lowercase());
        }
    }
    if out.is_empty() {
        "foto".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace_and_lowercases() {
        assert_eq!(sanitize_filename("My  Photo  2024.JPG"), "my_photo_2024.jpg");
    }

    #[test]
    fn sanitize_strips_disallowed_characters() {
        assert_eq!(sanitize_filename("laporan (final)!.png"), "laporan_final.png");
        assert_eq!(sanitize_filename("foto-pagi_01.gif"), "foto-pagi_01.gif");
    }

    #[test]
    fn sanitize_never_returns_empty() {
        assert_eq!(sanitize_filename("@#$%"), "foto");
    }
}
