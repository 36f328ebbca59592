//! Great-circle geometry.

use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometres (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres, by the haversine
    /// formula.
    pub fn distance_km(&self, other: Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let p = Coordinates::new(48.8566, 2.3522);
        assert!(p.distance_km(p).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 1.0);
        let d = a.distance_km(b);
        // 2 * pi * R / 360 ≈ 111.195 km
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(59.9139, 10.7522);
        let b = Coordinates::new(60.3913, 5.3221);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
    }

    #[test]
    fn paris_to_london() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let london = Coordinates::new(51.5074, -0.1278);
        let d = paris.distance_km(london);
        assert!((d - 343.5).abs() < 1.5, "got {d}");
    }
}
