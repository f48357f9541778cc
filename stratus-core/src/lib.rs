//! Core library for the `stratus` weather TUI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeatherMap implementation
//! - Shared domain models (snapshot, condition icons)
//! - The city suggestion engine backing the search box
//!
//! It is used by `stratus-tui`, but can also be reused by other binaries or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod suggest;

pub use conditions::ConditionIcon;
pub use config::Config;
pub use error::FetchError;
pub use model::{CurrentConditions, WeatherSnapshot};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use suggest::{CityEntry, POPULAR_CITIES, SuggestionState};
