//! Image processor
//!
//! Processing is simulated by tagging the payload; the interesting part is
//! the round trip through [`ImageStorage`].

use crate::core::ports::ImageStorage;

/// Processes images on the way into and out of storage
#[derive(Debug)]
pub struct ImageProcessor<S> {
    storage: S,
}

impl<S: ImageStorage> ImageProcessor<S> {
    /// Create a processor over `storage`
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Store `processed_<data>` under `image_id`
    pub fn process_and_save(&mut self, image_id: &str, original_data: &str) -> bool {
        let processed = format!("processed_{original_data}");
        self.storage.save_image(image_id, &processed)
    }

    /// Fetch an image and return `enhanced_<data>`
    ///
    /// Missing and empty payloads both yield `None`.
    pub fn retrieve_and_enhance(&self, image_id: &str) -> Option<String> {
        self.storage
            .get_image(image_id)
            .filter(|data| !data.is_empty())
            .map(|data| format!("enhanced_{data}"))
    }

    /// The storage backend
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
