//! Built-in boards for previewing the layout without a task service.

use chores_common::{CompletionEvents, Section, SectionViews, Tally, Task, aggregate};
use chrono::{Datelike, NaiveDate};

/// One previewable board state.
pub struct Scenario {
    pub name: &'static str,
    pub date: NaiveDate,
    pub tally: Tally,
    pub sections: SectionViews,
    pub weather: &'static str,
}

fn ids(list: &[&str]) -> CompletionEvents { list.iter().map(|s| (*s).to_owned()).collect() }

fn build(
    name: &'static str,
    date: NaiveDate,
    previous: Tally,
    sections: &[Section],
    tasks: &[Task],
    completed: &[&str],
    weather: &'static str,
) -> Scenario {
    let (views, completions) = aggregate(sections, tasks, &ids(completed));
    let today = date.weekday();
    let tally = previous.maybe_reset(today).reconcile(&completions, today);
    Scenario {
        name,
        date,
        tally,
        sections: views,
        weather,
    }
}

fn day(
    y: i32,
    m: u32,
    d: u32,
) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Typical midweek board: three sections, some done.
fn midweek() -> Scenario {
    let sections = [
        Section::new("s1", "Kitchen"),
        Section::new("s2", "Yard"),
        Section::new("s3", "Laundry"),
    ];
    let tasks = [
        Task::new("t1", "Unload the dishwasher", Some("s1")),
        Task::new("t2", "Wipe down the counters and the stove top", Some("s1")),
        Task::new("t3", "Take out the recycling bin tonight", Some("s1")),
        Task::new("t4", "Mow the front lawn", Some("s2")),
        Task::new("t5", "Water the tomatoes", Some("s2")),
        Task::new("t6", "Fold towels", Some("s3")),
        Task::new("t7", "Match the socks", Some("s3")),
    ];
    let previous = Tally {
        tasks_completed: 6,
        counted_task_ids: ids(&["old1", "old2", "old3", "old4", "old5", "old6"]),
        last_reset: Some("Tuesday".to_owned()),
    };
    build(
        "midweek",
        day(2024, 5, 8),
        previous,
        &sections,
        &tasks,
        &["t1", "t5", "t6"],
        "Mostly Sunny, 72°F",
    )
}

/// More sections and tasks than fit: columns and rows get cut.
fn crowded() -> Scenario {
    let sections = [
        Section::new("s1", "Upstairs"),
        Section::new("s2", "Downstairs"),
        Section::new("s3", "Garage"),
        Section::new("s4", "Garden"),
    ];
    let mut tasks: Vec<Task> = (1..=8)
        .map(|n| Task::new(format!("u{n}"), format!("Upstairs chore number {n} with a long description"), Some("s1")))
        .collect();
    tasks.push(Task::new("d1", "Vacuum the living room rug", Some("s2")));
    tasks.push(Task::new("g1", "Sort the recycling", Some("s3")));
    tasks.push(Task::new("x1", "Feed the cat", None));
    build(
        "crowded",
        day(2024, 5, 10),
        Tally::default(),
        &sections,
        &tasks,
        &["u1", "u2"],
        "Chance Showers And Thunderstorms, 64°F",
    )
}

/// Monday morning: the tally starts over, one section only.
fn monday() -> Scenario {
    let sections = [Section::new("s1", "Everyone")];
    let tasks = [Task::new("t1", "Plan the week", Some("s1"))];
    let previous = Tally {
        tasks_completed: 23,
        counted_task_ids: ids(&["a", "b", "c"]),
        last_reset: Some("Sunday".to_owned()),
    };
    build(
        "monday",
        day(2024, 5, 13),
        previous,
        &sections,
        &tasks,
        &[],
        "Weather data unavailable",
    )
}

pub fn scenarios() -> Vec<Scenario> { vec![midweek(), crowded(), monday()] }
