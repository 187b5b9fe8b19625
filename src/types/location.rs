//! Geographic types: coordinates and named forecast locations.

use serde::Serialize;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are decimal degrees.
///
/// # Examples
///
/// ```
/// use windchill::LatLon;
///
/// let oslo = LatLon(59.91, 10.75);
/// assert_eq!(oslo.0, 59.91); // Latitude
/// assert_eq!(oslo.1, 10.75); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

/// A named place a forecast can be requested for.
///
/// The name is the primary key everywhere downstream (series, comparison
/// columns, rankings, alerts), so it must be unique within a
/// [`crate::LocationRegistry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Human-readable unique name, e.g. "Tromsø".
    pub name: String,
    /// Coordinates passed to the forecast provider.
    pub lat_lon: LatLon,
}

impl Location {
    pub fn new(name: impl Into<String>, lat_lon: LatLon) -> Self {
        Self {
            name: name.into(),
            lat_lon,
        }
    }
}
