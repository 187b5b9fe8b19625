pub mod cold_band;
pub mod forecast_config;
pub mod location;
pub mod sample;
