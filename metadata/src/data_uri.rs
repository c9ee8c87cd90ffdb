use base64::{engine::general_purpose, Engine};
use tracing::debug;

use crate::errors::MetadataError;
use crate::types::TokenMetadata;

pub const JSON_PREFIX: &str = "data:application/json;base64,";
pub const HTML_PREFIX: &str = "data:text/html;base64,";

/// Decodes the base64 payload of `uri` if it starts with `prefix`.
///
/// Returns `Ok(None)` when the prefix does not match.
pub fn decode_base64_uri(uri: &str, prefix: &str) -> Result<Option<Vec<u8>>, MetadataError> {
    if !uri.starts_with(prefix) {
        debug!(target: "tokenscope::metadata", prefix, "data uri prefix mismatch");
        return Ok(None);
    }

    let payload = match uri.split_once(',') {
        Some((_, payload)) => payload,
        None => return Ok(None),
    };

    Ok(Some(general_purpose::STANDARD.decode(payload)?))
}

pub fn decode_metadata(token_uri: &str) -> Result<Option<TokenMetadata>, MetadataError> {
    let Some(bytes) = decode_base64_uri(token_uri, JSON_PREFIX)? else {
        return Ok(None);
    };

    let json = String::from_utf8(bytes)?;
    Ok(Some(serde_json::from_str(&json)?))
}

pub fn decode_html(animation_url: &str) -> Result<Option<String>, MetadataError> {
    let Some(bytes) = decode_base64_uri(animation_url, HTML_PREFIX)? else {
        return Ok(None);
    };

    Ok(Some(String::from_utf8(bytes)?))
}
