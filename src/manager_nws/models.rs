use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

#[derive(Deserialize)]
pub struct RelativeLocationProperties {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    pub forecast: Option<String>,
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

/// One forecast period as published by NWS, e.g. "Tonight" or "Wednesday"
///
/// Any field may be absent upstream. A start time that is missing, null or not a string
/// ends up as None so the period can be dropped on its own later.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub start_time: Option<String>,
    pub is_daytime: Option<bool>,
    pub temperature: Option<i32>,
    pub name: Option<String>,
    pub temperature_unit: Option<String>,
    pub wind_speed: Option<String>,
    pub wind_direction: Option<String>,
    pub short_forecast: Option<String>,
    pub detailed_forecast: Option<String>,
    pub icon: Option<String>,
}

impl ForecastPeriod {
    /// Day/night flag, a period without one counts as daytime
    pub fn is_daytime(&self) -> bool {
        self.is_daytime.unwrap_or(true)
    }
}

/// Result of a points lookup
#[derive(Debug, Clone, PartialEq)]
pub struct PointInfo {
    pub forecast_url: String,
    pub place: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_defaults_when_fields_absent() {
        let period: ForecastPeriod = serde_json::from_str(r#"{"startTime": "2024-05-01T06:00:00-05:00"}"#).unwrap();

        assert!(period.is_daytime());
        assert_eq!(period.start_time.as_deref(), Some("2024-05-01T06:00:00-05:00"));
        assert_eq!(period.temperature, None);
        assert_eq!(period.name, None);
    }

    #[test]
    fn test_period_start_time_missing_null_or_wrong_type() {
        for json in [
            r#"{"name": "Tonight", "temperature": 50}"#,
            r#"{"name": "Tonight", "startTime": null, "temperature": 50}"#,
            r#"{"name": "Tonight", "startTime": 1714600800, "temperature": 50}"#,
        ] {
            let period: ForecastPeriod = serde_json::from_str(json).unwrap();

            assert_eq!(period.start_time, None);
            assert_eq!(period.temperature, Some(50));
        }
    }

    #[test]
    fn test_period_null_temperature() {
        let period: ForecastPeriod = serde_json::from_str(
            r#"{"startTime": "2024-05-01T18:00:00-05:00", "isDaytime": false, "temperature": null}"#
        ).unwrap();

        assert!(!period.is_daytime());
        assert_eq!(period.temperature, None);
    }
}
