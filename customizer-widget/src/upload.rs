//! Upload progress tracking and the uploaded-image list.
//!
//! The actual HTTP transfer is the host's business; this module models the
//! progress indicator driven by its begin/progress/success/complete
//! callbacks, and the thumbnail list fed from upload responses.

use serde::{Deserialize, Serialize};

/// State of the upload progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum UploadProgress {
    /// No upload running; the bar is hidden.
    #[default]
    Idle,
    /// An upload is running; the bar shows `percent`.
    InFlight {
        /// Completed percentage, 0 to 100.
        percent: u8,
    },
}

/// Tracks one upload form's progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTracker {
    progress: UploadProgress,
}

impl UploadTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload started: show the bar at 0%.
    pub fn begin(&mut self) {
        self.progress = UploadProgress::InFlight { percent: 0 };
    }

    /// Transfer progress callback. Values over 100 are clamped.
    pub fn advance(&mut self, percent: u8) {
        self.progress = UploadProgress::InFlight {
            percent: percent.min(100),
        };
    }

    /// Server accepted the upload: pin the bar at 100%.
    pub fn succeed(&mut self) {
        self.progress = UploadProgress::InFlight { percent: 100 };
    }

    /// Request finished (success or not): hide the bar.
    pub fn complete(&mut self) {
        self.progress = UploadProgress::Idle;
    }

    /// Current progress state.
    #[must_use]
    pub fn progress(&self) -> UploadProgress {
        self.progress
    }
}

/// One uploaded image available for placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// URL the upload response handed back.
    pub url: String,
}

/// Shape of a successful upload response body.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    success: String,
}

/// Parse an upload response into a thumbnail entry.
///
/// The response is a JSON object whose `success` field holds the image URL.
/// Malformed bodies are swallowed: the list stays as it was and no error
/// surfaces to the user.
#[must_use]
pub fn parse_upload_response(body: &str) -> Option<UploadedImage> {
    match serde_json::from_str::<UploadResponse>(body) {
        Ok(response) => Some(UploadedImage {
            url: response.success,
        }),
        Err(e) => {
            tracing::debug!("Ignoring malformed upload response: {e}");
            None
        }
    }
}

/// The uploaded-images strip under the upload form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadedImageList {
    images: Vec<UploadedImage>,
}

impl UploadedImageList {
    /// Append a thumbnail from an upload response body.
    ///
    /// Returns the appended entry, or `None` when the body was malformed.
    pub fn push_response(&mut self, body: &str) -> Option<&UploadedImage> {
        let image = parse_upload_response(body)?;
        self.images.push(image);
        self.images.last()
    }

    /// Remove a thumbnail by position (the little x on each entry).
    pub fn remove(&mut self, index: usize) -> Option<UploadedImage> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// All thumbnails in upload order.
    #[must_use]
    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }
}
