//! Error types for the I/O side of the board.

use std::path::PathBuf;

use chores_common::RenderError;

/// The task service could not deliver a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("unexpected payload from {endpoint}: {reason}")]
    Payload { endpoint: &'static str, reason: String },
}

/// Tally persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode tally: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The panel (or its stand-in) refused a frame.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode preview: {0}")]
    Preview(#[from] image::ImageError),

    #[error("frame is {actual_w}x{actual_h}, panel expects {expected_w}x{expected_h}")]
    Geometry {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// A cycle that ended without showing a board.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error("display failed: {0}")]
    Display(#[from] DisplayError),
}
