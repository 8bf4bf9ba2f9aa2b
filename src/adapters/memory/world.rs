//! In-memory game world

use std::collections::HashMap;

use crate::core::models::Location;
use crate::core::ports::GameWorld;

/// Locations keyed by name
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameWorld {
    locations: HashMap<String, Location>,
}

impl InMemoryGameWorld {
    /// Create a world with no locations
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the forest-and-cave world
    #[must_use]
    pub fn seeded() -> Self {
        let mut world = Self::new();
        world.add_location("forest", Location::new("A dense forest", ["mushroom", "stick"]));
        world.add_location("cave", Location::new("A dark cave", ["gem", "rock"]));
        world
    }

    /// Add or replace a location
    pub fn add_location(&mut self, name: impl Into<String>, location: Location) {
        self.locations.insert(name.into(), location);
    }

    /// Borrow a location
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }
}

impl GameWorld for InMemoryGameWorld {
    fn get_location_info(&self, location: &str) -> Option<Location> {
        self.locations.get(location).cloned()
    }

    fn remove_item(&mut self, location: &str, item: &str) -> bool {
        let Some(place) = self.locations.get_mut(location) else {
            return false;
        };
        let Some(index) = place.items.iter().position(|i| i == item) else {
            return false;
        };
        place.items.remove(index);
        true
    }
}
