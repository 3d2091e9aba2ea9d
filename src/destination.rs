use crate::coords::Coordinate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Navigation target. Set once per session through
/// [Engine::set_destination](crate::engine::Engine::set_destination);
/// replacing it resets session state (turn memory, arrival flag).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Destination {
    /// Display name
    pub name: String,
    /// Target position
    pub coordinate: Coordinate,
    /// Optional picture shown on arrival
    #[cfg_attr(feature = "serde", serde(default, rename = "imageUrl"))]
    pub image_url: Option<String>,
}

impl Destination {
    /// Builds new [Destination] from a display name and target [Coordinate].
    pub fn new<S: Into<String>>(name: S, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            image_url: None,
        }
    }
    /// Attach a picture URL shown by consumers on arrival.
    pub fn with_image_url<S: Into<String>>(mut self, url: S) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
