//! CSV export of a single location's forecast.

use crate::error::WindChillError;
use crate::types::sample::ForecastSeries;
use log::info;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

impl ForecastSeries {
    /// Renders the series as CSV with the header `time,temperature,wind_speed,wind_chill`.
    ///
    /// # Errors
    ///
    /// Returns [`WindChillError::DataFrame`] if polars fails to build or write the frame.
    pub fn to_csv(&self) -> Result<String, WindChillError> {
        let mut df = self.to_frame()?;
        let mut buf: Vec<u8> = Vec::new();
        CsvWriter::new(&mut buf)
            .include_header(true)
            .finish(&mut df)?;
        // Polars only emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// `Mo i Rana` becomes `mo_i_rana_forecast.csv`.
    pub fn export_file_name(&self) -> String {
        format!("{}_forecast.csv", self.name().to_lowercase().replace(' ', "_"))
    }

    /// Writes [`Self::to_csv`] to [`Self::export_file_name`] inside `dir`, creating
    /// `dir` if needed. Returns the written path.
    ///
    /// # Errors
    ///
    /// [`WindChillError::ExportIo`] if the directory or file can't be written.
    pub fn write_csv(&self, dir: impl AsRef<Path>) -> Result<PathBuf, WindChillError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| WindChillError::ExportIo(dir.to_path_buf(), e))?;

        let path = dir.join(self.export_file_name());
        let csv = self.to_csv()?;
        fs::write(&path, csv).map_err(|e| WindChillError::ExportIo(path.clone(), e))?;
        info!("Exported {} hours for {} to {:?}", self.len(), self.name(), path);
        Ok(path)
    }
}
