//! Fixed-interval cycle loop.

use std::thread;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

use crate::cycle::{Outcome, SkipReason};
use crate::error::CycleError;

/// Runs a cycle every `interval`. A failed cycle never stops the loop.
#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub const fn new(interval: Duration) -> Self { Self { interval } }

    pub const fn interval(&self) -> Duration { self.interval }

    /// Run `step` for `today` and log how it ended.
    pub fn tick<F>(
        step: &mut F,
        today: NaiveDate,
    ) -> Option<Outcome>
    where
        F: FnMut(NaiveDate) -> Result<Outcome, CycleError>,
    {
        let started = Instant::now();
        let _span = tracing::info_span!("cycle", %today).entered();
        match step(today) {
            Ok(outcome) => {
                match outcome {
                    Outcome::Displayed {
                        tasks_completed,
                        persisted,
                    } => tracing::info!(tasks_completed, persisted, elapsed = ?started.elapsed(), "board refreshed"),
                    Outcome::Skipped(SkipReason::RemoteUnavailable) => {
                        tracing::warn!("cycle skipped: task source unavailable");
                    }
                    Outcome::Skipped(SkipReason::NoSections) => tracing::info!("cycle skipped: no sections"),
                }
                Some(outcome)
            }
            Err(e) => {
                tracing::error!(error = %e, "cycle failed");
                None
            }
        }
    }

    /// Run `step` forever, once per interval, dated with the local calendar day.
    pub fn run<F>(
        &self,
        mut step: F,
    ) -> !
    where
        F: FnMut(NaiveDate) -> Result<Outcome, CycleError>,
    {
        tracing::info!(interval = ?self.interval, "scheduler started");
        loop {
            let started = Instant::now();
            Self::tick(&mut step, Local::now().date_naive());
            // Cycles that overrun start the next one immediately.
            if let Some(rest) = self.interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chores_common::RenderError;
    use chores_common::fonts::TextRole;

    use super::*;

    fn day() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 8).unwrap() }

    #[test]
    fn test_tick_passes_outcome_through() {
        let mut step = |_: NaiveDate| -> Result<Outcome, CycleError> { Ok(Outcome::Skipped(SkipReason::NoSections)) };
        assert_eq!(Scheduler::tick(&mut step, day()), Some(Outcome::Skipped(SkipReason::NoSections)));
    }

    #[test]
    fn test_tick_contains_errors() {
        let mut calls = 0;
        let mut step = |_: NaiveDate| -> Result<Outcome, CycleError> {
            calls += 1;
            Err(CycleError::Render(RenderError::FontUnavailable(TextRole::Task)))
        };
        assert_eq!(Scheduler::tick(&mut step, day()), None);
        assert_eq!(Scheduler::tick(&mut step, day()), None);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_tick_receives_date() {
        let mut seen = None;
        let mut step = |today: NaiveDate| -> Result<Outcome, CycleError> {
            seen = Some(today);
            Ok(Outcome::Displayed {
                tasks_completed: 0,
                persisted: true,
            })
        };
        Scheduler::tick(&mut step, day());
        assert_eq!(seen, Some(day()));
    }
}
