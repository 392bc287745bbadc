//! Remote collaborators: where tasks and the weather line come from.
//!
//! Response shapes are mapped to [`Task`] / [`Section`] / [`CompletionEvents`]
//! here; malformed payloads become [`RemoteError`] and never reach the core.

mod todoist;
mod weather;

use std::time::Duration;

use chores_common::{CompletionEvents, Section, Task};
use reqwest::blocking::Client;

use crate::error::RemoteError;

pub use todoist::TodoistSource;
pub use weather::{NwsWeather, WEATHER_UNAVAILABLE};

/// A project on a remote task service.
pub trait TaskSource {
    /// Sections in display order.
    fn list_sections(&self) -> Result<Vec<Section>, RemoteError>;

    /// Open tasks.
    fn list_tasks(&self) -> Result<Vec<Task>, RemoteError>;

    /// Ids of tasks completed in the project.
    fn list_completed(&self) -> Result<CompletionEvents, RemoteError>;
}

/// One-line forecast for the footer.
///
/// Never fails: implementations return [`WEATHER_UNAVAILABLE`] instead.
pub trait WeatherSource {
    fn current_summary(&self) -> String;
}

/// Blocking HTTP client shared by both sources.
pub fn http_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Client, RemoteError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|source| RemoteError::Http {
            endpoint: "client",
            source,
        })
}
