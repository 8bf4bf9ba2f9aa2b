//! Image storage port

/// Keyed storage for image payloads
#[cfg_attr(test, mockall::automock)]
pub trait ImageStorage {
    /// Store `data` under `image_id`, replacing anything already there
    fn save_image(&mut self, image_id: &str, data: &str) -> bool;

    /// Fetch the payload stored under `image_id`
    fn get_image(&self, image_id: &str) -> Option<String>;
}
