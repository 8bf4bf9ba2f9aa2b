//! Game world port

use crate::core::models::Location;

/// The map a player walks around in
#[cfg_attr(test, mockall::automock)]
pub trait GameWorld {
    /// Describe a location, including the items lying there
    fn get_location_info(&self, location: &str) -> Option<Location>;

    /// Take one `item` out of `location`
    ///
    /// Returns `false` if either the location or the item is missing.
    fn remove_item(&mut self, location: &str, item: &str) -> bool;
}
