//! # Photo payloads
//!
//! A record's photo is stored as a single string, in one of two shapes the
//! rendering layer accepts interchangeably:
//!
//! | Variant | Stored string | Resolved `src` |
//! |---------|---------------|----------------|
//! | [`PhotoRef::DataUri`] | `data:image/png;base64,...` | the string itself |
//! | [`PhotoRef::Asset`] | `jane.jpg` | `assets/<collection>/jane.jpg` |
//!
//! The inline data URI is what the admin panel writes when a file is
//! uploaded; the bare file name is the static-asset convention used by
//! photos shipped with the site. Neither form supersedes the other.
//! Serialization round-trips through the plain string, so stored data
//! written by either path deserializes unchanged.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A record's photo reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhotoRef {
    /// Self-contained `data:` URI, usable directly as an image source.
    DataUri(String),
    /// Bare file name resolved against `assets/<collection>/`.
    Asset(String),
}

impl From<String> for PhotoRef {
    fn from(value: String) -> Self {
        if value.starts_with("data:") {
            PhotoRef::DataUri(value)
        } else {
            PhotoRef::Asset(value)
        }
    }
}

impl From<PhotoRef> for String {
    fn from(value: PhotoRef) -> Self {
        match value {
            PhotoRef::DataUri(s) | PhotoRef::Asset(s) => s,
        }
    }
}

impl PhotoRef {
    /// Encode an uploaded file's bytes into an inline data URI.
    ///
    /// The mime type is guessed from the file extension. An empty byte
    /// buffer (a failed or aborted read) is an encode failure; callers
    /// degrade to "no photo supplied".
    pub fn encode(file_name: &str, bytes: &[u8]) -> Result<Self, StoreError> {
        if bytes.is_empty() {
            return Err(StoreError::PhotoEncode {
                file: file_name.to_string(),
            });
        }
        let mime = mime_for(file_name);
        let payload = general_purpose::STANDARD.encode(bytes);
        Ok(PhotoRef::DataUri(format!("data:{mime};base64,{payload}")))
    }

    /// Resolve to an image `src`, given the collection's asset directory.
    pub fn src(&self, asset_dir: &str) -> String {
        match self {
            PhotoRef::DataUri(uri) => uri.clone(),
            PhotoRef::Asset(name) => format!("assets/{asset_dir}/{name}"),
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_classification() {
        let inline = PhotoRef::from("data:image/png;base64,AAAA".to_string());
        assert!(matches!(inline, PhotoRef::DataUri(_)));

        let asset = PhotoRef::from("jane.jpg".to_string());
        assert_eq!(asset, PhotoRef::Asset("jane.jpg".to_string()));
    }

    #[test]
    fn test_serde_roundtrip_is_plain_string() {
        let photo = PhotoRef::Asset("jane.jpg".to_string());
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, "\"jane.jpg\"");

        let back: PhotoRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, photo);
    }

    #[test]
    fn test_encode_produces_data_uri() {
        let photo = PhotoRef::encode("portrait.png", b"not-really-a-png").unwrap();
        let src = photo.src("members");
        assert!(src.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_encode_empty_bytes_fails() {
        let err = PhotoRef::encode("portrait.png", b"").unwrap_err();
        assert!(matches!(err, StoreError::PhotoEncode { .. }));
    }

    #[test]
    fn test_src_resolution() {
        let inline = PhotoRef::DataUri("data:image/jpeg;base64,AAAA".to_string());
        assert_eq!(inline.src("members"), "data:image/jpeg;base64,AAAA");

        let asset = PhotoRef::Asset("gala.png".to_string());
        assert_eq!(asset.src("events"), "assets/events/gala.png");
    }
}
