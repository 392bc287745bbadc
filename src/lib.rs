//! Host side of the family chore board.
//!
//! Wires the pure core in `chores_common` to the outside world:
//!
//! - [`sources`]: Todoist tasks and the NWS forecast line
//! - [`store`]: the JSON tally file and its lock
//! - [`display`]: hand-off of rendered planes to the panel driver
//! - [`cycle`]: one fetch, count, render, show, persist pass
//! - [`scheduler`]: the refresh loop
//! - [`config`]: TOML configuration

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod config;
pub mod cycle;
pub mod display;
pub mod error;
pub mod scheduler;
pub mod sources;
pub mod store;

pub use config::Config;
pub use cycle::{Cycle, Outcome, SkipReason};
pub use display::{DisplaySink, FileSink};
pub use error::{CycleError, DisplayError, RemoteError, StoreError};
pub use scheduler::Scheduler;
pub use sources::{NwsWeather, TaskSource, TodoistSource, WeatherSource};
pub use store::{JsonFileStore, StoreLock, TallyStore};
