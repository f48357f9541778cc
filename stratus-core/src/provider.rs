use crate::{error::FetchError, model::CurrentConditions};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Abstraction over the remote weather service.
///
/// There is exactly one production implementation; the trait exists so the
/// UI loop can be driven by a canned provider in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city name, already mapped to display
    /// units. Every failure mode is a [`FetchError`] carrying its banner text.
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{conditions::ConditionIcon, model::WeatherSnapshot};

    #[derive(Debug)]
    struct CannedProvider;

    #[async_trait]
    impl WeatherProvider for CannedProvider {
        async fn current_weather(&self, city: &str) -> Result<CurrentConditions, FetchError> {
            if city == "Nowhere" {
                return Err(FetchError::CityNotFound);
            }
            Ok(CurrentConditions {
                snapshot: WeatherSnapshot {
                    location: city.to_string(),
                    ..WeatherSnapshot::placeholder()
                },
                icon: ConditionIcon::Clear,
            })
        }
    }

    #[tokio::test]
    async fn trait_objects_dispatch_to_the_implementation() {
        let provider: Box<dyn WeatherProvider> = Box::new(CannedProvider);

        let ok = provider.current_weather("Oslo").await.expect("canned success");
        assert_eq!(ok.snapshot.location, "Oslo");

        let err = provider.current_weather("Nowhere").await.unwrap_err();
        assert!(matches!(err, FetchError::CityNotFound));
    }
}
