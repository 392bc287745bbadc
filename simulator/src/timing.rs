//! Timing constants for the simulator.

use std::time::Duration;

/// Event poll interval. The board is static, so nothing needs a fast frame rate.
pub const POLL_TIME: Duration = Duration::from_millis(50);
