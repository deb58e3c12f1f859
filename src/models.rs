use std::fmt;

/// A point on the map in decimal degrees
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    /// Returns coordinates if both values are within range
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude, -90 to 90
    /// * 'long' - longitude, -180 to 180
    pub fn new(lat: f64, long: f64) -> Option<Coordinates> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&long) {
            Some(Coordinates { lat, long })
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0.4}, {:0.4}", self.lat, self.long)
    }
}

/// Resolved location with an optional human-readable label
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinates: Coordinates,
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_range() {
        assert!(Coordinates::new(47.6062, -122.3321).is_some());
        assert!(Coordinates::new(-90.0, 180.0).is_some());
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert!(Coordinates::new(90.5, 0.0).is_none());
        assert!(Coordinates::new(0.0, -181.0).is_none());
        assert!(Coordinates::new(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn test_coordinates_display() {
        let c = Coordinates { lat: 38.8894, long: -77.03521 };
        assert_eq!(c.to_string(), "38.8894, -77.0352");
    }
}
