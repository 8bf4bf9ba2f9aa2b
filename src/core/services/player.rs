//! Player in a game world

use log::debug;

use crate::core::ports::GameWorld;

/// Where every player starts
pub const START_LOCATION: &str = "forest";

/// A player walking around a [`GameWorld`]
#[derive(Debug)]
pub struct Player<W> {
    world: W,
    location: String,
    inventory: Vec<String>,
}

impl<W: GameWorld> Player<W> {
    /// Create a player at [`START_LOCATION`] with empty pockets
    pub fn new(world: W) -> Self {
        Self {
            world,
            location: START_LOCATION.to_string(),
            inventory: Vec::new(),
        }
    }

    /// Pick up `item` from the current location
    ///
    /// The item moves from the world into the inventory. Returns `false`
    /// when the item is not lying here.
    pub fn pick_up(&mut self, item: &str) -> bool {
        let present = self
            .world
            .get_location_info(&self.location)
            .is_some_and(|location| location.has_item(item));

        if !present {
            debug!("No {item} at {}", self.location);
            return false;
        }

        self.inventory.push(item.to_string());
        self.world.remove_item(&self.location, item);
        true
    }

    /// Walk to another location
    ///
    /// Returns `false` and stays put if the world has no such location.
    pub fn move_to(&mut self, location: &str) -> bool {
        if self.world.get_location_info(location).is_none() {
            return false;
        }
        location.clone_into(&mut self.location);
        true
    }

    /// Current location name
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Items carried, in pick-up order
    #[must_use]
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// The world
    pub const fn world(&self) -> &W {
        &self.world
    }
}
