//! Weekly completion tally with exactly-once counting.
//!
//! The tally is the only state that survives between cycles. It counts each
//! completed task id once per week; `counted_task_ids` is the source of
//! truth for that dedup.
//!
//! # Cycle order
//!
//! ```ignore
//! let tally = store.load();
//! let tally = tally.maybe_reset(today);       // always first
//! let tally = tally.reconcile(&completed, today);
//! store.save(&tally)?;
//! ```
//!
//! Resetting after reconciling would throw away completions counted earlier
//! the same Monday.
//!
//! # Known limitation
//!
//! Dedup is by task id only. A task that is completed, reopened and completed
//! again within a week counts once; an id reused by the task source after
//! deletion is never counted again that week.

use std::collections::BTreeSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::model::CompletionEvents;

/// Day on which the weekly tally starts over.
pub const RESET_DAY: Weekday = Weekday::Mon;

/// Full English name of a weekday, as stored in `last_reset`.
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Persisted weekly tally.
///
/// Serialises to the JSON record
/// `{"tasks_completed": 3, "counted_task_ids": ["a", "b"], "last_reset": "Monday"}`.
/// Missing fields take their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tally {
    /// Tasks completed this week. Never decreases within a week.
    pub tasks_completed: u64,
    /// Task ids already counted this week.
    pub counted_task_ids: BTreeSet<String>,
    /// Weekday name stamped by the last cycle that touched the tally.
    pub last_reset: Option<String>,
}

impl Tally {
    /// Zero tally stamped with `today`.
    pub fn fresh(today: Weekday) -> Self {
        Self {
            tasks_completed: 0,
            counted_task_ids: BTreeSet::new(),
            last_reset: Some(weekday_name(today).to_owned()),
        }
    }

    /// Start a new week on the first cycle observed on a Monday.
    ///
    /// The stamp written by [`Tally::reconcile`] guards against a second reset
    /// on the same Monday.
    #[must_use]
    pub fn maybe_reset(
        self,
        today: Weekday,
    ) -> Self {
        let reset_name = weekday_name(RESET_DAY);
        if today == RESET_DAY && self.last_reset.as_deref() != Some(reset_name) {
            Self::fresh(today)
        } else {
            self
        }
    }

    /// Ids in `completions` that this tally has not counted yet.
    pub fn uncounted<'a>(
        &'a self,
        completions: &'a CompletionEvents,
    ) -> impl Iterator<Item = &'a String> + 'a {
        completions.difference(&self.counted_task_ids)
    }

    /// Count every not-yet-counted id in `completions` and stamp `today`.
    ///
    /// Applying the same completion set twice counts nothing the second time.
    #[must_use]
    pub fn reconcile(
        mut self,
        completions: &CompletionEvents,
        today: Weekday,
    ) -> Self {
        let new = self.uncounted(completions).count() as u64;
        self.tasks_completed = self.tasks_completed.saturating_add(new);
        self.counted_task_ids.extend(completions.iter().cloned());
        self.last_reset = Some(weekday_name(today).to_owned());
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
