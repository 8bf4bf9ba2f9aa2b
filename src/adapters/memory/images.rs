//! In-memory image storage

use std::collections::HashMap;

use crate::core::ports::ImageStorage;

/// Image payloads keyed by ID
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageStorage {
    images: HashMap<String, String>,
}

impl InMemoryImageStorage {
    /// Create empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored images
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageStorage for InMemoryImageStorage {
    fn save_image(&mut self, image_id: &str, data: &str) -> bool {
        self.images.insert(image_id.to_string(), data.to_string());
        true
    }

    fn get_image(&self, image_id: &str) -> Option<String> {
        self.images.get(image_id).cloned()
    }
}
