use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid metadata json: {0}")]
    Json(#[from] serde_json::Error),
}
