//! Core of the family chore board.
//!
//! This crate holds everything that does not touch the network, the file
//! system or the panel, shared by the board binary and the desktop
//! simulator:
//!
//! - [`tally`]: weekly completion tally with exactly-once counting
//! - [`aggregate`]: per-section grouping of a task snapshot
//! - [`text_flow`]: greedy word wrapping against a pixel width
//! - [`layout`]: board composition and rendering into two ink planes
//! - [`canvas`]: packed 1-bit planes and the 270 degree panel rotation
//! - [`fonts`]: text roles and the font metrics capability
//! - [`config`]: board geometry and spacing constants
//! - [`colors`]: ink planes and preview colours
//! - [`styles`]: pre-computed drawing styles
//! - [`widgets`]: drawing primitives and label formatting
//!
//! # A cycle, from the core's point of view
//!
//! ```ignore
//! let (views, completed) = aggregate(&sections, &tasks, &completed_ids);
//! let tally = tally.maybe_reset(today).reconcile(&completed, today);
//! let canvas = board.render(&BoardData { tally: &tally, sections: &views, date, weather }, &fonts)?;
//! ```
//!
//! Every function here is deterministic and side-effect free.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod aggregate;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod styles;
pub mod tally;
pub mod text_flow;
pub mod widgets;

// Re-export commonly used items
pub use aggregate::aggregate;
pub use canvas::{Canvas, Plane};
pub use colors::Ink;
pub use error::RenderError;
pub use fonts::{FontMetrics, FontSet, TextRole};
pub use layout::{Board, BoardData, Element, render};
pub use model::{CompletionEvents, Section, SectionView, SectionViews, Task, UNCATEGORIZED};
pub use tally::{Tally, weekday_name};
pub use text_flow::wrap;
