pub mod alerts;
pub mod comparison_table;
pub mod forecast_aggregator;
pub mod heatmap;
pub mod ranking;
pub mod report;
