use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// One match from a Nominatim search, coordinates arrive as strings
#[serde_as]
#[derive(Deserialize)]
pub struct Place {
    #[serde_as(as = "DisplayFromStr")]
    pub lat: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub lon: f64,
    pub display_name: Option<String>,
}
