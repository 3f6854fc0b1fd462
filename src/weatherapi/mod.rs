mod client;
pub mod models;

pub use client::WeatherApiClient;
pub use models::WeatherReport;
