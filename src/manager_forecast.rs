use log::info;
use serde::Deserialize;
use crate::daily_aggregator::{aggregate, DailySummary};
use crate::errors::ForecastError;
use crate::manager_geocode::Geocoder;
use crate::manager_nws::models::ForecastPeriod;
use crate::manager_nws::NWS;
use crate::models::{Coordinates, Location};

/// Form fields as submitted, any of them may be missing or blank
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ForecastQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl ForecastQuery {
    pub fn city(&self) -> Option<&str> {
        non_blank(&self.city)
    }
    pub fn lat(&self) -> Option<&str> {
        non_blank(&self.lat)
    }
    pub fn lon(&self) -> Option<&str> {
        non_blank(&self.lon)
    }
}

/// Everything the page needs to show a forecast
#[derive(Debug)]
pub struct WeeklyForecast {
    pub place: String,
    pub today: Option<ForecastPeriod>,
    pub days: Vec<DailySummary>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Returns coordinates if the query carries any, coordinates win over a city name.
/// Giving only one of latitude/longitude, or values that don't parse or are out of range,
/// is an input error.
///
/// # Arguments
///
/// * 'query' - the submitted form
pub fn query_coordinates(query: &ForecastQuery) -> Result<Option<Coordinates>, ForecastError> {
    match (query.lat(), query.lon()) {
        (None, None) => Ok(None),
        (Some(lat), Some(lon)) => {
            let lat = lat.parse::<f64>()
                .map_err(|_| ForecastError::InvalidInput(format!("Latitude '{}' is not a number", lat)))?;
            let lon = lon.parse::<f64>()
                .map_err(|_| ForecastError::InvalidInput(format!("Longitude '{}' is not a number", lon)))?;

            Coordinates::new(lat, lon)
                .map(Some)
                .ok_or_else(|| ForecastError::InvalidInput(
                    "Latitude must be within -90 to 90 and longitude within -180 to 180".to_string()))
        },
        _ => Err(ForecastError::InvalidInput("Both latitude and longitude are needed".to_string())),
    }
}

/// Resolves the query to a location, geocoding the city name if no coordinates were given
///
/// # Arguments
///
/// * 'geocoder' - geocoding manager
/// * 'query' - the submitted form
pub async fn resolve_location(geocoder: &Geocoder, query: &ForecastQuery) -> Result<Location, ForecastError> {
    if let Some(coordinates) = query_coordinates(query)? {
        return Ok(Location { coordinates, label: None });
    }

    let city = query.city()
        .ok_or_else(|| ForecastError::InvalidInput("Please enter a city or coordinates".to_string()))?;

    geocoder.search(city).await?
        .ok_or_else(|| ForecastError::LocationNotFound(city.to_string()))
}

/// Builds a weekly forecast for the submitted form
///
/// # Arguments
///
/// * 'geocoder' - geocoding manager
/// * 'nws' - forecast manager
/// * 'query' - the submitted form
/// * 'max_days' - number of days to aggregate
pub async fn weekly_forecast(geocoder: &Geocoder, nws: &NWS, query: &ForecastQuery, max_days: usize) -> Result<WeeklyForecast, ForecastError> {
    let location = resolve_location(geocoder, query).await?;
    info!("fetching forecast for {}", location.coordinates);

    let point = nws.forecast_url(&location.coordinates).await?;
    let periods = nws.forecast(&point.forecast_url).await?;

    let days = aggregate(&periods, max_days);
    let place = location.label
        .or(point.place)
        .unwrap_or_else(|| location.coordinates.to_string());

    Ok(WeeklyForecast {
        place,
        today: periods.into_iter().next(),
        days,
    })
}
