//! File-input plumbing shared by the admin forms.

use std::sync::Arc;

use dioxus::html::FileEngine;

/// An uploaded photo file, read to completion by the form.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Read the first selected file to completion.
///
/// This is the one suspension point in a mutation: the caller awaits until
/// the file's bytes are fully read. Returns `None` when no file was
/// selected. A file that fails to read comes back with empty bytes and is
/// rejected downstream as an encode failure.
pub async fn read_photo(engine: Option<Arc<dyn FileEngine>>) -> Option<PhotoUpload> {
    let engine = engine?;
    let file_name = engine.files().into_iter().next()?;
    let bytes = match engine.read_file(&file_name).await {
        Some(bytes) => bytes,
        None => {
            tracing::warn!("failed to read uploaded file {}", file_name);
            Vec::new()
        }
    };
    Some(PhotoUpload { file_name, bytes })
}
