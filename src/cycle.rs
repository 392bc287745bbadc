//! One refresh of the board: fetch, count, render, show, persist.

use chores_common::{Board, BoardData, FontMetrics, FontSet, aggregate};
use chrono::{Datelike, NaiveDate};

use crate::display::DisplaySink;
use crate::error::CycleError;
use crate::sources::{TaskSource, WeatherSource};
use crate::store::TallyStore;

/// Why a cycle left the display untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The task source failed.
    RemoteUnavailable,
    /// The project has no sections.
    NoSections,
}

/// How a cycle that did not fail ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Displayed {
        /// Weekly count shown on the board.
        tasks_completed: u64,
        /// Whether the tally behind it reached the store.
        persisted: bool,
    },
}

/// Collaborators of a cycle, wired once at startup.
pub struct Cycle<T, W, S, D, M = FontSet> {
    pub tasks: T,
    pub weather: W,
    pub store: S,
    pub display: D,
    pub board: Board,
    pub fonts: M,
}

impl<T, W, S, D, M> Cycle<T, W, S, D, M>
where
    T: TaskSource,
    W: WeatherSource,
    S: TallyStore,
    D: DisplaySink,
    M: FontMetrics,
{
    /// Run one cycle for `today`.
    ///
    /// Nothing is persisted unless the frame reached the display. A store
    /// that cannot be locked or saved is reported in the outcome, not as an
    /// error; the board is still shown and the next cycle starts from the
    /// last saved tally.
    pub fn run_once(
        &mut self,
        today: NaiveDate,
    ) -> Result<Outcome, CycleError> {
        let fetched = self
            .tasks
            .list_sections()
            .and_then(|sections| Ok((sections, self.tasks.list_tasks()?, self.tasks.list_completed()?)));
        let (sections, tasks, completed_ids) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!(error = %e, "task source unavailable, skipping cycle");
                return Ok(Outcome::Skipped(SkipReason::RemoteUnavailable));
            }
        };
        if sections.is_empty() {
            tracing::info!("project has no sections, nothing to show");
            return Ok(Outcome::Skipped(SkipReason::NoSections));
        }

        let (views, completions) = aggregate(&sections, &tasks, &completed_ids);
        tracing::debug!(
            sections = views.len(),
            open = views.incomplete_total(),
            completed = completions.len(),
            "tasks aggregated"
        );

        let weather = self.weather.current_summary();

        // Without the lock the tally may be read but never written.
        let lock = match self.store.lock() {
            Ok(lock) => Some(lock),
            Err(e) => {
                tracing::warn!(error = %e, "tally store not locked, this cycle's counts will not be saved");
                None
            }
        };
        let weekday = today.weekday();
        let tally = self.store.load().maybe_reset(weekday).reconcile(&completions, weekday);

        let data = BoardData {
            tally: &tally,
            sections: &views,
            date: today,
            weather: &weather,
        };
        let canvas = self.board.render(&data, &self.fonts)?;
        self.display.show(&canvas)?;

        let persisted = lock.is_some()
            && match self.store.save(&tally) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "tally not saved, this cycle's counts are lost");
                    false
                }
            };
        drop(lock);
        Ok(Outcome::Displayed {
            tasks_completed: tally.tasks_completed,
            persisted,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chores_common::fonts::TextRole;
    use chores_common::{Canvas, CompletionEvents, RenderError, Section, Task, Tally};
    use embedded_graphics::mono_font::MonoFont;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::error::{DisplayError, RemoteError, StoreError};
    use crate::store::{JsonFileStore, StoreLock};

    // ------------------------------------------------------------------------
    // Fakes
    // ------------------------------------------------------------------------

    #[derive(Default)]
    struct FakeTasks {
        sections: Vec<Section>,
        tasks: Vec<Task>,
        completed: CompletionEvents,
        down: bool,
    }

    impl TaskSource for FakeTasks {
        fn list_sections(&self) -> Result<Vec<Section>, RemoteError> {
            if self.down {
                return Err(RemoteError::Payload {
                    endpoint: "sections",
                    reason: "down".to_owned(),
                });
            }
            Ok(self.sections.clone())
        }

        fn list_tasks(&self) -> Result<Vec<Task>, RemoteError> { Ok(self.tasks.clone()) }

        fn list_completed(&self) -> Result<CompletionEvents, RemoteError> { Ok(self.completed.clone()) }
    }

    struct FakeWeather;

    impl WeatherSource for FakeWeather {
        fn current_summary(&self) -> String { "Sunny, 70°F".to_owned() }
    }

    #[derive(Clone, Default)]
    struct MemoryStore {
        saved: Rc<RefCell<Option<Tally>>>,
        fail_saves: bool,
        fail_locks: bool,
    }

    impl TallyStore for MemoryStore {
        fn lock(&self) -> Result<StoreLock, StoreError> {
            if self.fail_locks {
                return Err(StoreError::Lock {
                    path: "memory.lock".into(),
                    source: std::io::Error::other("read-only file system"),
                });
            }
            Ok(StoreLock::unlocked())
        }

        fn load(&self) -> Tally { self.saved.borrow().clone().unwrap_or_default() }

        fn save(
            &self,
            tally: &Tally,
        ) -> Result<(), StoreError> {
            if self.fail_saves {
                return Err(StoreError::Write {
                    path: "memory".into(),
                    source: std::io::Error::other("disk full"),
                });
            }
            *self.saved.borrow_mut() = Some(tally.clone());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        frames: Rc<RefCell<Vec<Canvas>>>,
        broken: bool,
    }

    impl DisplaySink for RecordingSink {
        fn show(
            &mut self,
            canvas: &Canvas,
        ) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Io {
                    path: "panel".into(),
                    source: std::io::Error::other("spi timeout"),
                });
            }
            self.frames.borrow_mut().push(canvas.clone());
            Ok(())
        }
    }

    /// 6x10 for every role except the optional missing one.
    struct SmallFonts(Option<TextRole>);

    impl FontMetrics for SmallFonts {
        fn font(
            &self,
            role: TextRole,
        ) -> Option<&'static MonoFont<'static>> {
            (Some(role) != self.0).then_some(&FONT_6X10)
        }
    }

    fn kitchen() -> FakeTasks {
        FakeTasks {
            sections: vec![Section::new("s1", "Kitchen"), Section::new("s2", "Yard")],
            tasks: vec![
                Task::new("t1", "Dishes", Some("s1")),
                Task::new("t2", "Sweep", Some("s1")),
                Task::new("t3", "Mow", Some("s2")),
            ],
            completed: ["t1".to_owned()].into(),
            down: false,
        }
    }

    fn cycle(
        tasks: FakeTasks,
        store: MemoryStore,
        sink: RecordingSink,
    ) -> Cycle<FakeTasks, FakeWeather, MemoryStore, RecordingSink, SmallFonts> {
        Cycle {
            tasks,
            weather: FakeWeather,
            store,
            display: sink,
            board: Board::default(),
            fonts: SmallFonts(None),
        }
    }

    // 2024-05-08 is a Wednesday, 2024-05-13 a Monday.
    fn wednesday() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 8).unwrap() }

    fn monday() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 13).unwrap() }

    // ------------------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cycle_displays_and_persists() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut cycle = cycle(kitchen(), store.clone(), sink.clone());

        let outcome = cycle.run_once(wednesday()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Displayed {
                tasks_completed: 1,
                persisted: true
            }
        );

        let frames = sink.frames.borrow();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].size(), Board::default().panel_size());
        assert!(!frames[0].primary.is_blank());
        assert!(!frames[0].accent.is_blank());

        let saved = store.saved.borrow().clone().unwrap();
        assert_eq!(saved.tasks_completed, 1);
        assert_eq!(saved.last_reset.as_deref(), Some("Wednesday"));
    }

    #[test]
    fn test_second_cycle_counts_nothing_new() {
        let store = MemoryStore::default();
        let mut cycle = cycle(kitchen(), store.clone(), RecordingSink::default());
        cycle.run_once(wednesday()).unwrap();
        let outcome = cycle.run_once(wednesday()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Displayed {
                tasks_completed: 1,
                persisted: true
            }
        );
    }

    #[test]
    fn test_monday_resets_before_counting() {
        let store = MemoryStore::default();
        *store.saved.borrow_mut() = Some(Tally {
            tasks_completed: 9,
            counted_task_ids: ["old".to_owned()].into(),
            last_reset: Some("Sunday".to_owned()),
        });
        let mut cycle = cycle(kitchen(), store.clone(), RecordingSink::default());

        let outcome = cycle.run_once(monday()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Displayed {
                tasks_completed: 1,
                persisted: true
            }
        );
        let saved = store.saved.borrow().clone().unwrap();
        assert_eq!(saved.counted_task_ids, ["t1".to_owned()].into());
        assert_eq!(saved.last_reset.as_deref(), Some("Monday"));

        // Same Monday again: no second reset.
        cycle.tasks.completed.insert("t2".to_owned());
        let outcome = cycle.run_once(monday()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Displayed {
                tasks_completed: 2,
                persisted: true
            }
        );
    }

    #[test]
    fn test_remote_failure_skips_everything() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let tasks = FakeTasks {
            down: true,
            ..kitchen()
        };
        let mut cycle = cycle(tasks, store.clone(), sink.clone());

        assert_eq!(
            cycle.run_once(wednesday()).unwrap(),
            Outcome::Skipped(SkipReason::RemoteUnavailable)
        );
        assert!(sink.frames.borrow().is_empty());
        assert!(store.saved.borrow().is_none());
    }

    #[test]
    fn test_no_sections_skips_everything() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let tasks = FakeTasks {
            sections: Vec::new(),
            ..kitchen()
        };
        let mut cycle = cycle(tasks, store.clone(), sink.clone());

        assert_eq!(cycle.run_once(wednesday()).unwrap(), Outcome::Skipped(SkipReason::NoSections));
        assert!(sink.frames.borrow().is_empty());
        assert!(store.saved.borrow().is_none());
    }

    #[test]
    fn test_display_failure_persists_nothing() {
        let store = MemoryStore::default();
        let sink = RecordingSink {
            broken: true,
            ..RecordingSink::default()
        };
        let mut cycle = cycle(kitchen(), store.clone(), sink);

        assert!(matches!(cycle.run_once(wednesday()), Err(CycleError::Display(_))));
        assert!(store.saved.borrow().is_none());
    }

    #[test]
    fn test_render_failure_persists_nothing() {
        let store = MemoryStore::default();
        let sink = RecordingSink::default();
        let mut cycle = cycle(kitchen(), store.clone(), sink.clone());
        cycle.fonts = SmallFonts(Some(TextRole::Weather));

        assert!(matches!(
            cycle.run_once(wednesday()),
            Err(CycleError::Render(RenderError::FontUnavailable(TextRole::Weather)))
        ));
        assert!(store.saved.borrow().is_none());
        assert!(sink.frames.borrow().is_empty());
    }

    #[test]
    fn test_save_failure_is_reported_not_raised() {
        let store = MemoryStore {
            fail_saves: true,
            ..MemoryStore::default()
        };
        let sink = RecordingSink::default();
        let mut cycle = cycle(kitchen(), store, sink.clone());

        assert_eq!(
            cycle.run_once(wednesday()).unwrap(),
            Outcome::Displayed {
                tasks_completed: 1,
                persisted: false
            }
        );
        assert_eq!(sink.frames.borrow().len(), 1);
    }

    #[test]
    fn test_lock_failure_still_displays_without_saving() {
        let store = MemoryStore {
            fail_locks: true,
            ..MemoryStore::default()
        };
        let sink = RecordingSink::default();
        let mut cycle = cycle(kitchen(), store.clone(), sink.clone());

        assert_eq!(
            cycle.run_once(wednesday()).unwrap(),
            Outcome::Displayed {
                tasks_completed: 1,
                persisted: false
            }
        );
        assert_eq!(sink.frames.borrow().len(), 1);
        assert!(store.saved.borrow().is_none());
    }

    #[test]
    fn test_unwritable_tally_location_still_displays() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let sink = RecordingSink::default();
        let mut cycle = Cycle {
            tasks: kitchen(),
            weather: FakeWeather,
            store: JsonFileStore::new(blocker.join("task_tally.json")),
            display: sink.clone(),
            board: Board::default(),
            fonts: SmallFonts(None),
        };

        assert_eq!(
            cycle.run_once(wednesday()).unwrap(),
            Outcome::Displayed {
                tasks_completed: 1,
                persisted: false
            }
        );
        assert_eq!(sink.frames.borrow().len(), 1);
    }

    #[test]
    fn test_render_error_converts() {
        let err: CycleError = RenderError::FontUnavailable(TextRole::Title).into();
        assert!(err.to_string().contains("render failed"));
    }
}
