pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use reqwest::header::ACCEPT;
use crate::manager_nws::errors::NWSError;
use crate::manager_nws::models::{ForecastPeriod, ForecastResponse, PointInfo, PointsResponse};
use crate::models::Coordinates;


/// Struct for fetching weather forecasts from the US National Weather Service
pub struct NWS {
    client: Client,
    base_url: String,
}

impl NWS {
    /// Returns a NWS struct ready for fetching forecasts
    ///
    /// NWS refuses requests without a User-Agent, so one must be given.
    ///
    /// # Arguments
    ///
    /// * 'base_url' - NWS API root, normally https://api.weather.gov
    /// * 'user_agent' - identification sent with every request
    /// * 'timeout' - timeout for each request
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<NWS, NWSError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Looks up the forecast URL for the grid point covering the given coordinates.
    /// The coordinates are rounded to 4 decimals since NWS redirects anything more precise.
    ///
    /// # Arguments
    ///
    /// * 'coordinates' - location to look up
    pub async fn forecast_url(&self, coordinates: &Coordinates) -> Result<PointInfo, NWSError> {
        let url = format!("{}/points/{:0.4},{:0.4}", self.base_url, coordinates.lat, coordinates.long);

        let json = self.get(&url).await?;
        let points: PointsResponse = serde_json::from_str(&json)?;

        let forecast_url = points.properties.forecast
            .ok_or_else(|| NWSError::NWS(format!("No forecast available for {}", coordinates)))?;

        let place = points.properties.relative_location
            .and_then(|r| match (r.properties.city, r.properties.state) {
                (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
                (Some(city), None) => Some(city),
                _ => None,
            });

        Ok(PointInfo { forecast_url, place })
    }

    /// Retrieves the forecast periods from a forecast URL, in the order NWS publishes them
    ///
    /// # Arguments
    ///
    /// * 'forecast_url' - url as returned by `forecast_url`
    pub async fn forecast(&self, forecast_url: &str) -> Result<Vec<ForecastPeriod>, NWSError> {
        let json = self.get(forecast_url).await?;
        let forecast: ForecastResponse = serde_json::from_str(&json)?;

        Ok(forecast.properties.periods)
    }

    async fn get(&self, url: &str) -> Result<String, NWSError> {
        let req = self.client
            .get(url)
            .header(ACCEPT, "application/geo+json")
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(NWSError::NWS(format!("Error while fetching {} from NWS: {}", url, status)));
        }

        Ok(req.text().await?)
    }
}
