pub mod errors;
mod models;

use std::time::Duration;
use log::info;
use reqwest::Client;
use crate::manager_geocode::errors::GeocodeError;
use crate::manager_geocode::models::Place;
use crate::models::{Coordinates, Location};


/// Struct for resolving place names to coordinates using a Nominatim search endpoint
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    /// Returns a Geocoder ready for searching
    ///
    /// # Arguments
    ///
    /// * 'base_url' - Nominatim root, normally https://nominatim.openstreetmap.org
    /// * 'user_agent' - identification sent with every request, Nominatim requires one
    /// * 'timeout' - timeout for each request
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Geocoder, GeocodeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Searches for a place by free text and returns the best match, or None if nothing matched
    ///
    /// # Arguments
    ///
    /// * 'name' - place name, e.g. "Seattle" or "Portland, OR"
    pub async fn search(&self, name: &str) -> Result<Option<Location>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let req = self.client
            .get(url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(GeocodeError::Request(format!("Error while searching for '{}': {}", name, status)));
        }

        let json = req.text().await?;
        let places: Vec<Place> = serde_json::from_str(&json)?;

        let Some(place) = places.into_iter().next() else {
            info!("no geocoding match for '{}'", name);
            return Ok(None);
        };

        let coordinates = Coordinates::new(place.lat, place.lon)
            .ok_or_else(|| GeocodeError::Document(format!("Coordinates out of range: {}, {}", place.lat, place.lon)))?;

        Ok(Some(Location { coordinates, label: place.display_name }))
    }
}
