use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    conditions::ConditionIcon,
    error::FetchError,
    model::{CurrentConditions, NOT_AVAILABLE, WeatherSnapshot},
};

use super::WeatherProvider;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        snapshot_from_response(status, &body)
    }
}

/// Map a raw provider response to displayable conditions. Kept free of any
/// transport so the status and validation rules are testable offline.
fn snapshot_from_response(status: StatusCode, body: &str) -> Result<CurrentConditions, FetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::CityNotFound);
    }
    if !status.is_success() {
        debug!(status = %status, body = %truncate_body(body), "provider returned non-success");
        return Err(FetchError::Unavailable(status));
    }

    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|_| FetchError::InvalidData)?;

    // The measurement blocks and the resolved name must all be present.
    let (Some(main), Some(wind), Some(weather), Some(name)) =
        (parsed.main, parsed.wind, parsed.weather, parsed.name)
    else {
        return Err(FetchError::InvalidData);
    };
    let condition = weather.first().ok_or(FetchError::InvalidData)?;

    let observed_at = parsed
        .dt
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    let snapshot = WeatherSnapshot {
        location: name,
        temperature_c: round_i32(main.temp),
        feels_like_c: round_i32(main.feels_like),
        humidity_pct: main.humidity,
        // Provider reports m/s; the panel shows km/h.
        wind_kmh: round_i32(wind.speed * 3.6),
        description: condition.description.clone(),
        pressure_hpa: round_i32(main.pressure),
        // Meters on the wire, kilometers on screen.
        visibility_km: round_i32(parsed.visibility.unwrap_or(0.0) / 1000.0),
        uv_index: NOT_AVAILABLE.to_string(),
        observed_at,
    };
    let icon = ConditionIcon::for_code(&condition.icon);

    Ok(CurrentConditions { snapshot, icon })
}

fn round_i32(v: f64) -> i32 {
    v.round() as i32
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

/// Wire mirror of the current-weather body. Every block the validation gate
/// cares about is an `Option` so a missing one is data, not a parse error.
#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    dt: Option<i64>,
    visibility: Option<f64>,
    main: Option<OwMain>,
    weather: Option<Vec<OwWeather>>,
    wind: Option<OwWind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON_BODY: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "base": "stations",
        "main": {"temp": 21.46, "feels_like": 21.2, "temp_min": 19.0, "temp_max": 23.3,
                 "pressure": 1012, "humidity": 53},
        "visibility": 10000,
        "wind": {"speed": 4.6, "deg": 250},
        "clouds": {"all": 0},
        "dt": 1661870592,
        "sys": {"country": "GB", "sunrise": 1661834187, "sunset": 1661882248},
        "timezone": 3600,
        "id": 2643743,
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn maps_and_rounds_a_well_formed_body() {
        let got = snapshot_from_response(StatusCode::OK, LONDON_BODY).expect("valid body");
        let snap = &got.snapshot;

        assert_eq!(snap.location, "London");
        assert_eq!(snap.temperature_c, 21);
        assert_eq!(snap.feels_like_c, 21);
        assert_eq!(snap.humidity_pct, 53);
        // 4.6 m/s * 3.6 = 16.56 km/h, rounds to 17
        assert_eq!(snap.wind_kmh, 17);
        assert_eq!(snap.description, "clear sky");
        assert_eq!(snap.pressure_hpa, 1012);
        assert_eq!(snap.visibility_km, 10);
        assert_eq!(snap.uv_index, NOT_AVAILABLE);
        assert_eq!(snap.observed_at.timestamp(), 1661870592);
        assert_eq!(got.icon, ConditionIcon::Clear);
    }

    #[test]
    fn not_found_status_beats_body_contents() {
        let err = snapshot_from_response(StatusCode::NOT_FOUND, LONDON_BODY).unwrap_err();
        assert_eq!(err.to_string(), "City not found");
    }

    #[test]
    fn other_failure_statuses_are_unavailable() {
        for status in [
            StatusCode::UNAUTHORIZED,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = snapshot_from_response(status, "{}").unwrap_err();
            assert_eq!(err.to_string(), "Weather data unavailable");
        }
    }

    #[test]
    fn missing_blocks_are_invalid_data() {
        let stripped: serde_json::Value = serde_json::from_str(LONDON_BODY).unwrap();

        for block in ["main", "wind", "weather", "name"] {
            let mut body = stripped.clone();
            body.as_object_mut().unwrap().remove(block);
            let err =
                snapshot_from_response(StatusCode::OK, &body.to_string()).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid weather data received",
                "missing {block}"
            );
        }
    }

    #[test]
    fn empty_weather_array_is_invalid_data() {
        let mut body: serde_json::Value = serde_json::from_str(LONDON_BODY).unwrap();
        body["weather"] = serde_json::json!([]);

        let err = snapshot_from_response(StatusCode::OK, &body.to_string()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidData));
    }

    #[test]
    fn unparseable_body_is_invalid_data() {
        let err = snapshot_from_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, FetchError::InvalidData));
    }

    #[test]
    fn missing_visibility_defaults_to_zero() {
        let mut body: serde_json::Value = serde_json::from_str(LONDON_BODY).unwrap();
        body.as_object_mut().unwrap().remove("visibility");

        let got = snapshot_from_response(StatusCode::OK, &body.to_string()).unwrap();
        assert_eq!(got.snapshot.visibility_km, 0);
    }

    #[test]
    fn night_rain_code_maps_like_day_rain() {
        let mut body: serde_json::Value = serde_json::from_str(LONDON_BODY).unwrap();
        body["weather"][0]["icon"] = serde_json::json!("10n");

        let got = snapshot_from_response(StatusCode::OK, &body.to_string()).unwrap();
        assert_eq!(got.icon, ConditionIcon::Rain);
    }
}
