use crate::types::sample::ForecastSeries;
use serde::Serialize;

/// Wind chill per location and hour index, for heatmaps and gauges.
///
/// Rows follow selection order. Columns are hour positions (1-based in labels),
/// not timestamps; a series shorter than the widest one is padded with `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindChillMatrix {
    pub hours: usize,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub location: String,
    pub values: Vec<Option<f64>>,
}

impl WindChillMatrix {
    pub fn from_series(series: &[ForecastSeries]) -> Self {
        let hours = series.iter().map(ForecastSeries::len).max().unwrap_or(0);
        let rows = series
            .iter()
            .map(|s| {
                let mut values: Vec<Option<f64>> =
                    s.samples.iter().map(|sample| Some(sample.wind_chill)).collect();
                values.resize(hours, None);
                MatrixRow {
                    location: s.name().to_string(),
                    values,
                }
            })
            .collect();
        Self { hours, rows }
    }

    /// "Hour 1" .. "Hour N".
    pub fn hour_labels(&self) -> Vec<String> {
        (1..=self.hours).map(|h| format!("Hour {h}")).collect()
    }

    /// Column `hour` (0-based) across all locations.
    pub fn column(&self, hour: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.values.get(hour).copied().flatten())
            .collect()
    }
}
