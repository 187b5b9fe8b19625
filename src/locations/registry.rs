//! Static registry of named forecast locations.

use crate::error::WindChillError;
use crate::types::location::{LatLon, Location};
use std::collections::HashMap;

const NORWAY: [(&str, f64, f64); 28] = [
    ("Oslo", 59.91, 10.75),
    ("Bergen", 60.39, 5.32),
    ("Trondheim", 63.43, 10.39),
    ("Stavanger", 58.97, 5.73),
    ("Kristiansand", 58.15, 7.995),
    ("Drammen", 59.74, 10.20),
    ("Sandnes", 58.85, 5.735),
    ("Fredrikstad", 59.22, 10.93),
    ("Tromsø", 69.65, 18.96),
    ("Lillestrøm", 59.956, 11.049),
    ("Sarpsborg", 59.284, 11.11),
    ("Skien", 59.21, 9.61),
    ("Sandefjord", 59.131, 10.216),
    ("Haugesund", 59.414, 5.268),
    ("Moss", 59.464, 10.659),
    ("Porsgrunn", 59.139, 9.655),
    ("Bodø", 67.282, 14.375),
    ("Arendal", 58.462, 8.772),
    ("Hamar", 60.795, 11.068),
    ("Ålesund", 62.47, 6.15),
    ("Mo i Rana", 66.312, 14.128),
    ("Narvik", 68.438, 17.427),
    ("Alta", 69.968, 23.271),
    ("Molde", 62.737, 7.160),
    ("Notodden", 59.558, 9.249),
    ("Levanger", 63.744, 11.297),
    ("Namsos", 64.472, 11.494),
    ("Voss", 60.623, 6.419),
];

const INTERNATIONAL: [(&str, f64, f64); 5] = [
    ("New York", 40.7128, -74.0060),
    ("Chicago", 41.8781, -87.6298),
    ("Toronto", 43.65107, -79.347015),
    ("Denver", 39.7392, -104.9903),
    ("Oslo", 59.9139, 10.7522),
];

/// An immutable, ordered set of uniquely named [`Location`]s.
///
/// # Examples
///
/// ```
/// use windchill::LocationRegistry;
///
/// let registry = LocationRegistry::norway();
/// let selection = registry.select(["Tromsø", "Oslo"]).unwrap();
/// assert_eq!(selection[0].name, "Tromsø");
/// assert!(registry.select(["Atlantis"]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl LocationRegistry {
    /// Builds a registry, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`WindChillError::DuplicateLocation`] if two locations share a name.
    pub fn new(locations: Vec<Location>) -> Result<Self, WindChillError> {
        let mut index = HashMap::with_capacity(locations.len());
        for (i, location) in locations.iter().enumerate() {
            if index.insert(location.name.clone(), i).is_some() {
                return Err(WindChillError::DuplicateLocation(location.name.clone()));
            }
        }
        Ok(Self { locations, index })
    }

    fn from_table(table: &[(&str, f64, f64)]) -> Self {
        let locations: Vec<Location> = table
            .iter()
            .map(|(name, lat, lon)| Location::new(*name, LatLon(*lat, *lon)))
            .collect();
        let index = locations
            .iter()
            .enumerate()
            .map(|(i, l)| (l.name.clone(), i))
            .collect();
        Self { locations, index }
    }

    /// The 28 Norwegian cities of the dashboards.
    pub fn norway() -> Self {
        Self::from_table(&NORWAY)
    }

    /// North American cities plus Oslo.
    pub fn international() -> Self {
        Self::from_table(&INTERNATIONAL)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&i| &self.locations[i])
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.name.as_str()).collect()
    }

    /// Names in alphabetical order, for selection widgets.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names = self.names();
        names.sort_unstable();
        names
    }

    /// Resolves names into locations, keeping the caller's order. Repeated names
    /// are collapsed to their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`WindChillError::UnknownLocation`] for the first name not in the registry.
    pub fn select<I, S>(&self, names: I) -> Result<Vec<Location>, WindChillError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<Location> = Vec::new();
        for name in names {
            let name = name.as_ref();
            let location = self
                .get(name)
                .ok_or_else(|| WindChillError::UnknownLocation(name.to_string()))?;
            if !selected.iter().any(|l| l.name == location.name) {
                selected.push(location.clone());
            }
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registries() {
        let norway = LocationRegistry::norway();
        assert_eq!(norway.len(), 28);
        assert_eq!(norway.get("Tromsø").unwrap().lat_lon, LatLon(69.65, 18.96));
        assert_eq!(norway.names()[0], "Oslo");
        assert_eq!(norway.sorted_names()[0], "Alta");

        let international = LocationRegistry::international();
        assert_eq!(international.len(), 5);
        assert!(international.get("Denver").is_some());
    }

    #[test]
    fn test_select_keeps_order_and_dedups() {
        let registry = LocationRegistry::norway();
        let selected = registry
            .select(["Voss", "Oslo", "Voss", "Alta"])
            .unwrap();
        let names: Vec<&str> = selected.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Voss", "Oslo", "Alta"]);
    }

    #[test]
    fn test_select_unknown_name() {
        let registry = LocationRegistry::norway();
        let err = registry.select(["Oslo", "Denver"]).unwrap_err();
        assert!(matches!(err, WindChillError::UnknownLocation(name) if name == "Denver"));
    }

    #[test]
    fn test_select_empty() {
        let registry = LocationRegistry::norway();
        let selected = registry.select(Vec::<String>::new()).unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = LocationRegistry::new(vec![
            Location::new("Oslo", LatLon(59.91, 10.75)),
            Location::new("Oslo", LatLon(59.9139, 10.7522)),
        ])
        .unwrap_err();
        assert!(matches!(err, WindChillError::DuplicateLocation(name) if name == "Oslo"));
    }
}
