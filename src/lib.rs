#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod coords;
mod destination;
mod engine;
mod errors;
mod heading;
mod sample;
mod state;
mod turn;

#[cfg(feature = "catalog")]
#[cfg_attr(docrs, doc(cfg(feature = "catalog")))]
mod catalog;

// pub export
pub use errors::Error;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    #[cfg(feature = "catalog")]
    pub use crate::catalog::{Catalog, Place, PlaceCoordinates};
    pub use crate::cfg::Config;
    pub use crate::coords::{wrap_180, wrap_360, Coordinate, EARTH_RADIUS_M};
    pub use crate::destination::Destination;
    pub use crate::engine::Engine;
    pub use crate::errors::Error;
    pub use crate::heading::HeadingFilter;
    pub use crate::sample::{HeadingIter, HeadingSample, PositionIter, PositionSample, Sample};
    pub use crate::state::{Arrival, Eta, Event, NavigationState};
    pub use crate::turn::TurnDirection;
    // re-export
    pub use hifitime::{Duration, Epoch};
}
