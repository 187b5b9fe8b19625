pub mod error;
pub mod forecast_provider;
pub mod open_meteo;
pub mod response_cache;
