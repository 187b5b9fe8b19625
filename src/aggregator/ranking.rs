//! Per-location views taken at a single reference hour: rankings and map markers.

use crate::types::forecast_config::{RankingOrder, ReferenceHour};
use crate::types::location::LatLon;
use crate::types::sample::ForecastSeries;
use serde::Serialize;

/// One row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub location: String,
    pub time: String,
    pub temperature: f64,
    pub wind_chill: f64,
}

/// Orders locations by wind chill at `reference`.
///
/// The sort is stable: locations with equal wind chill keep their order in
/// `series`. Empty series are skipped.
pub fn rank(
    series: &[ForecastSeries],
    reference: ReferenceHour,
    order: RankingOrder,
) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = series
        .iter()
        .filter_map(|s| {
            s.at(reference).map(|sample| RankingEntry {
                location: s.name().to_string(),
                time: sample.time.clone(),
                temperature: sample.temperature,
                wind_chill: sample.wind_chill,
            })
        })
        .collect();

    match order {
        RankingOrder::Ascending => entries.sort_by(|a, b| a.wind_chill.total_cmp(&b.wind_chill)),
        RankingOrder::Descending => entries.sort_by(|a, b| b.wind_chill.total_cmp(&a.wind_chill)),
    }
    entries
}

/// A location plotted on a map, coloured by its wind chill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub location: String,
    pub lat_lon: LatLon,
    pub wind_chill: f64,
}

pub fn map_markers(series: &[ForecastSeries], reference: ReferenceHour) -> Vec<MapMarker> {
    series
        .iter()
        .filter_map(|s| {
            s.at(reference).map(|sample| MapMarker {
                location: s.name().to_string(),
                lat_lon: s.location.lat_lon,
                wind_chill: sample.wind_chill,
            })
        })
        .collect()
}
