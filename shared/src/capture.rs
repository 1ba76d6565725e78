use crate::error::CaptureError;
use crate::model::{CaptureSource, ImageHandle, ImageId};

pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

pub fn validate_image_file(name: &str, mime: &str) -> Result<(), CaptureError> {
    if is_image_mime(mime) {
        Ok(())
    } else {
        log::warn!("Rejecting non-image file: {} ({})", name, mime);
        Err(CaptureError::InvalidFileType {
            name: name.to_string(),
            mime: if mime.is_empty() {
                "unknown".to_string()
            } else {
                mime.to_string()
            },
        })
    }
}

/// Holds the single current image. A new selection supersedes the old one,
/// which is handed back so the caller can release its URL.
#[derive(Debug, Default)]
pub struct ImageSlot {
    next_id: u64,
    current: Option<ImageHandle>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ImageHandle> {
        self.current.as_ref()
    }

    /// Validates and stores a new image. On rejection nothing changes.
    pub fn select(
        &mut self,
        name: &str,
        mime: &str,
        source: CaptureSource,
        url: impl Into<String>,
    ) -> Result<(ImageHandle, Option<ImageHandle>), CaptureError> {
        validate_image_file(name, mime)?;

        self.next_id += 1;
        let handle = ImageHandle {
            id: ImageId(self.next_id),
            name: name.to_string(),
            mime: mime.to_string(),
            source,
            url: url.into(),
        };
        let previous = self.current.replace(handle.clone());
        log::debug!("Selected image {} ({}) from {}", handle.id, handle.name, source);
        Ok((handle, previous))
    }

    /// The current image if it is a camera snapshot. While one is shown the
    /// live view is unmounted, so the camera must not be restarted in place.
    pub fn captured_frame(&self) -> Option<&ImageHandle> {
        self.current
            .as_ref()
            .filter(|image| image.source == CaptureSource::Camera)
    }

    pub fn clear(&mut self) -> Option<ImageHandle> {
        self.current.take()
    }
}

/// A live media stream whose tracks can be stopped.
pub trait MediaTracks {
    fn stop_all(&self);
}

/// Scoped ownership of an acquired camera stream. Tracks are stopped exactly
/// once: on [`CameraLease::release`] or when the lease is dropped.
pub struct CameraLease<S: MediaTracks> {
    stream: Option<S>,
}

impl<S: MediaTracks> CameraLease<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    pub fn release(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop_all();
            log::debug!("Camera stream released");
        }
    }
}

impl<S: MediaTracks> Drop for CameraLease<S> {
    fn drop(&mut self) {
        self.release();
    }
}
