use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::ConditionIcon;

/// Display value used when a field has no data source. The UV index always
/// carries it: reading it would take a second API call we deliberately skip.
pub const NOT_AVAILABLE: &str = "N/A";

/// The full set of conditions shown to the user, already converted to display
/// units. Built whole on every successful fetch and replaced wholesale; no
/// field is ever mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location name as the provider resolved it; may differ from the query
    /// in spelling or capitalization.
    pub location: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: u8,
    pub wind_kmh: i32,
    pub description: String,
    pub pressure_hpa: i32,
    pub visibility_km: i32,
    pub uv_index: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Snapshot shown between startup and the first completed fetch, so the
    /// panel is never blank.
    pub fn placeholder() -> Self {
        Self {
            location: "London".to_string(),
            temperature_c: 24,
            feels_like_c: 26,
            humidity_pct: 64,
            wind_kmh: 18,
            description: "Clear sky".to_string(),
            pressure_hpa: 1013,
            visibility_km: 10,
            uv_index: NOT_AVAILABLE.to_string(),
            observed_at: Utc::now(),
        }
    }
}

/// A snapshot paired with the condition icon chosen for it. The two are
/// always replaced together so the display never mixes old and new data.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub snapshot: WeatherSnapshot,
    pub icon: ConditionIcon,
}
