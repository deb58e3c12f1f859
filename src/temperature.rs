/// Converts Fahrenheit to Celsius rounded to whole degrees
///
/// # Arguments
///
/// * 'temp' - temperature in Fahrenheit
pub fn fahrenheit_to_celsius(temp: i32) -> i32 {
    ((temp as f64 - 32.0) * 5.0 / 9.0).round() as i32
}

/// Celsius value for display, "N/A" when the temperature is unknown
///
/// # Arguments
///
/// * 'temp' - temperature in Fahrenheit, if any
pub fn to_celsius(temp: Option<i32>) -> String {
    match temp {
        Some(t) => fahrenheit_to_celsius(t).to_string(),
        None => "N/A".to_string(),
    }
}

/// Formats a temperature for display in both units, e.g. "85°F / 29°C"
///
/// Temperatures already in Celsius are shown as is.
///
/// # Arguments
///
/// * 'temp' - temperature, if any
/// * 'unit' - unit as reported upstream, "F" when absent
pub fn display_temperature(temp: Option<i32>, unit: Option<&str>) -> String {
    match (temp, unit.unwrap_or("F")) {
        (None, _) => "N/A".to_string(),
        (Some(t), "C") => format!("{}°C", t),
        (Some(t), _) => format!("{}°F / {}°C", t, to_celsius(Some(t))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32), 0);
        assert_eq!(fahrenheit_to_celsius(212), 100);
        assert_eq!(fahrenheit_to_celsius(85), 29);
        assert_eq!(fahrenheit_to_celsius(-40), -40);
        assert_eq!(fahrenheit_to_celsius(0), -18);
    }

    #[test]
    fn test_to_celsius_unknown() {
        assert_eq!(to_celsius(None), "N/A");
        assert_eq!(to_celsius(Some(50)), "10");
    }

    #[test]
    fn test_display_temperature() {
        assert_eq!(display_temperature(Some(85), Some("F")), "85°F / 29°C");
        assert_eq!(display_temperature(Some(85), None), "85°F / 29°C");
        assert_eq!(display_temperature(Some(20), Some("C")), "20°C");
        assert_eq!(display_temperature(None, Some("F")), "N/A");
    }
}
