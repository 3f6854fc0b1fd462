use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response from `/v1/current.json`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub humidity: i32,
    pub wind_kph: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative URL, e.g. `//cdn.weatherapi.com/weather/64x64/day/116.png`
    pub icon: String,
}

/// Error envelope returned by weatherapi.com, e.g. for an unknown location.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Weather payload served to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReport {
    pub name: String,
    pub sys: Sys,
    pub main: Main,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sys {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Main {
    /// Degrees Celsius
    pub temp: f64,
    /// Degrees Celsius
    pub feels_like: f64,
    /// Percent
    pub humidity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherCondition {
    pub description: String,
    /// Icon file name, e.g. `116.png`
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Wind {
    /// Metres per second
    pub speed: f64,
}

impl From<CurrentResponse> for WeatherReport {
    fn from(res: CurrentResponse) -> Self {
        let icon = res
            .current
            .condition
            .icon
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            name: res.location.name,
            sys: Sys {
                country: res.location.country,
            },
            main: Main {
                temp: res.current.temp_c,
                feels_like: res.current.feelslike_c,
                humidity: res.current.humidity,
            },
            weather: vec![WeatherCondition {
                description: res.current.condition.text,
                icon,
            }],
            wind: Wind {
                // kph -> m/s
                speed: res.current.wind_kph / 3.6,
            },
        }
    }
}
