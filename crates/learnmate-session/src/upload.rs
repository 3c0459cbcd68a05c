//! Video upload boundary.
//!
//! An [`UploadSlot`] holds at most one selected file. Offering a file whose
//! declared media type is not the accepted type leaves the slot unchanged
//! and reports nothing.

use std::path::Path;

use tracing::debug;

/// The single media type accepted for video uploads
pub const ACCEPTED_VIDEO_TYPE: &str = "video/mp4";

/// A file reference as picked by the user; the bytes are never read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// Display name, stored as the session content
    pub name: String,
    /// Declared media type
    pub media_type: String,
}

impl VideoFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    /// Reference for a file on disk, media type guessed from its extension
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let media_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        Self { name, media_type }
    }

    pub fn is_accepted(&self, accepted_type: &str) -> bool {
        self.media_type == accepted_type
    }
}

#[derive(Debug, Clone)]
pub struct UploadSlot {
    accepted_type: String,
    selected: Option<VideoFile>,
}

impl Default for UploadSlot {
    fn default() -> Self {
        Self::new(ACCEPTED_VIDEO_TYPE)
    }
}

impl UploadSlot {
    pub fn new(accepted_type: impl Into<String>) -> Self {
        Self {
            accepted_type: accepted_type.into(),
            selected: None,
        }
    }

    /// Register `file` if its type is accepted. Returns whether it was taken.
    pub fn offer(&mut self, file: VideoFile) -> bool {
        if file.is_accepted(&self.accepted_type) {
            self.selected = Some(file);
            true
        } else {
            debug!("Ignoring upload {} of type {}", file.name, file.media_type);
            false
        }
    }

    pub fn selected(&self) -> Option<&VideoFile> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
