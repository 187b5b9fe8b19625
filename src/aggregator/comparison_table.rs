//! Multi-location comparison: all series joined on their timestamp.

use crate::types::sample::ForecastSeries;
use polars::prelude::*;

pub fn temperature_column(location: &str) -> String {
    format!("{location} temperature")
}

pub fn wind_chill_column(location: &str) -> String {
    format!("{location} wind chill")
}

/// One row per timestamp present in any selected series, with a temperature and a
/// wind-chill column per location.
///
/// Built as a full outer join on the exact `time` string. A location without a
/// sample at some timestamp has null in both of its columns for that row; values
/// are never interpolated. Rows are sorted by time.
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    frame: DataFrame,
    locations: Vec<String>,
}

impl ComparisonTable {
    /// Joins `series` in the given order. An empty slice yields a table with only
    /// an empty `time` column.
    pub fn build(series: &[ForecastSeries]) -> PolarsResult<Self> {
        let mut joined: Option<LazyFrame> = None;

        for s in series {
            let frame = s.to_frame()?.lazy().select([
                col("time"),
                col("temperature").alias(temperature_column(s.name())),
                col("wind_chill").alias(wind_chill_column(s.name())),
            ]);

            joined = Some(match joined {
                None => frame,
                Some(left) => left.join(
                    frame,
                    [col("time")],
                    [col("time")],
                    JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
                ),
            });
        }

        let frame = match joined {
            Some(lazy) => lazy
                .sort(["time"], SortMultipleOptions::default())
                .collect()?,
            None => df!("time" => Vec::<&str>::new())?,
        };

        Ok(Self {
            frame,
            locations: series.iter().map(|s| s.name().to_string()).collect(),
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Location names in column order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn times(&self) -> PolarsResult<Vec<String>> {
        Ok(self
            .frame
            .column("time")?
            .str()?
            .into_iter()
            .map(|t| t.unwrap_or_default().to_string())
            .collect())
    }

    /// Temperature of `location` at `row`; `None` when the location has no sample there.
    pub fn temperature(&self, location: &str, row: usize) -> PolarsResult<Option<f64>> {
        self.value(&temperature_column(location), row)
    }

    /// Wind chill of `location` at `row`; `None` when the location has no sample there.
    pub fn wind_chill(&self, location: &str, row: usize) -> PolarsResult<Option<f64>> {
        self.value(&wind_chill_column(location), row)
    }

    fn value(&self, column: &str, row: usize) -> PolarsResult<Option<f64>> {
        Ok(self.frame.column(column)?.f64()?.get(row))
    }
}

impl PartialEq for ComparisonTable {
    fn eq(&self, other: &Self) -> bool {
        self.locations == other.locations && self.frame.equals_missing(&other.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::{LatLon, Location};
    use crate::types::sample::HourlySample;

    fn series(name: &str, hours: std::ops::Range<u32>, temperature: f64) -> ForecastSeries {
        let samples = hours
            .map(|h| {
                HourlySample::new(
                    format!("2025-01-{:02}T{:02}:00", 10 + h / 24, h % 24),
                    temperature,
                    15.0,
                )
            })
            .collect();
        ForecastSeries::new(Location::new(name, LatLon(60.0, 10.0)), samples)
    }

    #[test]
    fn test_outer_join_keeps_all_timestamps() -> PolarsResult<()> {
        let a = series("Oslo", 0..24, -5.0);
        let b = series("Bergen", 0..20, 2.0);
        let table = ComparisonTable::build(&[a, b])?;

        assert_eq!(table.height(), 24);
        assert_eq!(
            table.frame().get_column_names(),
            [
                "time",
                "Oslo temperature",
                "Oslo wind chill",
                "Bergen temperature",
                "Bergen wind chill"
            ]
        );
        for row in 0..20 {
            assert_eq!(table.temperature("Bergen", row)?, Some(2.0));
        }
        for row in 20..24 {
            assert_eq!(table.temperature("Oslo", row)?, Some(-5.0));
            assert_eq!(table.temperature("Bergen", row)?, None);
            assert_eq!(table.wind_chill("Bergen", row)?, None);
        }
        Ok(())
    }

    #[test]
    fn test_rows_are_sorted_when_right_side_starts_earlier() -> PolarsResult<()> {
        let late = series("Molde", 5..10, -1.0);
        let early = series("Voss", 0..6, -3.0);
        let table = ComparisonTable::build(&[late, early])?;

        let times = table.times()?;
        assert_eq!(table.height(), 10);
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
        assert_eq!(table.temperature("Molde", 0)?, None);
        assert_eq!(table.temperature("Voss", 0)?, Some(-3.0));
        assert_eq!(table.temperature("Molde", 5)?, Some(-1.0));
        assert_eq!(table.temperature("Voss", 5)?, Some(-3.0));
        Ok(())
    }

    #[test]
    fn test_single_and_empty() -> PolarsResult<()> {
        let table = ComparisonTable::build(&[series("Alta", 0..12, -15.0)])?;
        assert_eq!(table.height(), 12);
        assert_eq!(table.locations(), ["Alta"]);

        let empty = ComparisonTable::build(&[])?;
        assert!(empty.is_empty());
        assert_eq!(empty.frame().get_column_names(), ["time"]);
        Ok(())
    }

    #[test]
    fn test_rebuild_is_identical() -> PolarsResult<()> {
        let input = [series("Oslo", 0..24, -5.0), series("Bergen", 3..20, 1.0)];
        let first = ComparisonTable::build(&input)?;
        let second = ComparisonTable::build(&input)?;
        assert_eq!(first, second);
        Ok(())
    }
}
