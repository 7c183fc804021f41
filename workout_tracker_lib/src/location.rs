use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A position on the map. Stored as a `Point` with longitude on the x axis and latitude on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub position: Point,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }
}

impl From<(f64, f64)> for Location {
    /// (latitude, longitude), the order leaflet and the geolocation API use.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latitude_and_longitude_apart() {
        let location = Location::new(56.175188, 10.196123);
        assert_eq!(location.latitude(), 56.175188);
        assert_eq!(location.longitude(), 10.196123);
        assert_eq!(location.position.x(), 10.196123);
        assert_eq!(Location::from((56.175188, 10.196123)), location);
    }
}
