//! Destination catalog (JSON points of interest)
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{coords::Coordinate, destination::Destination, errors::Error};

/// One catalog point of interest, as stored in the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Display name
    pub name: String,
    /// Position
    pub coordinates: PlaceCoordinates,
    /// Optional picture for the arrival overlay
    #[serde(default)]
    pub image_url: Option<String>,
    /// How many times this place was navigated to
    #[serde(default)]
    pub search_count: u64,
}

/// Position as stored on file
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaceCoordinates {
    /// Latitude [ddeg]
    pub lat: f64,
    /// Longitude [ddeg]
    pub lng: f64,
}

impl Place {
    /// Converts this catalog entry into an engine [Destination].
    pub fn destination(&self) -> Destination {
        let mut destination = Destination::new(
            self.name.clone(),
            Coordinate::new(self.coordinates.lat, self.coordinates.lng),
        );
        if let Some(url) = &self.image_url {
            destination = destination.with_image_url(url.clone());
        }
        destination
    }
}

/// In-memory destination catalog, parsed from a JSON array of
/// [Place] entries. Search popularity is tracked in memory and can
/// be persisted back with [Catalog::to_writer].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Up to this many entries are returned by [Catalog::search]
    pub const MAX_SEARCH_RESULTS: usize = 10;
    /// [Catalog::top_places] size
    pub const TOP_PLACES: usize = 5;

    /// Parses a [Catalog] from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let places: Vec<Place> = serde_json::from_reader(reader)?;
        debug!("catalog loaded, {} places", places.len());
        Ok(Self {
            places,
        })
    }
    /// Parses a [Catalog] from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }
    /// Serializes the catalog (including updated popularity counters)
    /// back to JSON.
    pub fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, &self.places)?;
        Ok(())
    }
    /// All places, in file order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }
    /// Case-insensitive prefix search, at most
    /// [Catalog::MAX_SEARCH_RESULTS] entries.
    pub fn search(&self, query: &str) -> Vec<&Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|place| place.name.to_lowercase().starts_with(&query))
            .take(Self::MAX_SEARCH_RESULTS)
            .collect()
    }
    /// Exact name lookup, as an engine [Destination].
    pub fn destination(&self, name: &str) -> Result<Destination, Error> {
        self.places
            .iter()
            .find(|place| place.name == name)
            .map(Place::destination)
            .ok_or_else(|| Error::UnknownDestination(name.to_string()))
    }
    /// Bumps the popularity counter of given place.
    pub fn record_search(&mut self, name: &str) -> Result<(), Error> {
        let place = self
            .places
            .iter_mut()
            .find(|place| place.name == name)
            .ok_or_else(|| Error::UnknownDestination(name.to_string()))?;
        place.search_count += 1;
        Ok(())
    }
    /// Most navigated-to places (at most [Catalog::TOP_PLACES]).
    /// Falls back to file order when no popularity was recorded yet.
    pub fn top_places(&self) -> Vec<&Place> {
        let mut popular: Vec<&Place> = self
            .places
            .iter()
            .filter(|place| place.search_count > 0)
            .collect();
        if popular.is_empty() {
            return self.places.iter().take(Self::TOP_PLACES).collect();
        }
        popular.sort_by(|a, b| b.search_count.cmp(&a.search_count));
        popular.truncate(Self::TOP_PLACES);
        popular
    }
}
