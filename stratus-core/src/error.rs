use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between submitting a city name and showing a
/// snapshot. Each variant's `Display` text is the message shown in the error
/// banner, so callers never compose user-facing strings themselves.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query was empty or whitespace-only; no request was made.
    #[error("Please enter a city name")]
    EmptyQuery,

    /// The provider answered 404 for the requested city.
    #[error("City not found")]
    CityNotFound,

    /// The provider answered with any other non-success status.
    #[error("Weather data unavailable")]
    Unavailable(StatusCode),

    /// The provider answered 2xx but the body was not the expected shape
    /// (unparseable, or missing the `main`/`wind`/`weather`/`name` blocks).
    #[error("Invalid weather data received")]
    InvalidData,

    /// The request never got an HTTP answer at all.
    #[error("Failed to fetch weather data")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts_are_the_banner_messages() {
        assert_eq!(FetchError::EmptyQuery.to_string(), "Please enter a city name");
        assert_eq!(FetchError::CityNotFound.to_string(), "City not found");
        assert_eq!(
            FetchError::Unavailable(StatusCode::INTERNAL_SERVER_ERROR).to_string(),
            "Weather data unavailable"
        );
        assert_eq!(FetchError::InvalidData.to_string(), "Invalid weather data received");
    }
}
