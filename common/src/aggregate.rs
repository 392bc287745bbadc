//! Per-section grouping of one cycle's task snapshot.

use std::collections::HashMap;

use crate::model::{CompletionEvents, Section, SectionView, SectionViews, Task, UNCATEGORIZED};

/// Group `tasks` into per-section views.
///
/// Every section gets a view, in `sections` order, even when it has no tasks.
/// A task whose id is in `completed` adds to its section's completed count;
/// any other task appends its content to the section's incomplete list, in
/// `tasks` order. Tasks without a known section land in an
/// [`UNCATEGORIZED`] view appended after the real sections, created only
/// when such a task exists.
///
/// The completion set is handed back unchanged for the tally.
pub fn aggregate(
    sections: &[Section],
    tasks: &[Task],
    completed: &CompletionEvents,
) -> (SectionViews, CompletionEvents) {
    let names: HashMap<&str, &str> = sections.iter().map(|s| (s.id.as_str(), s.name.as_str())).collect();

    let mut views = SectionViews::new();
    for section in sections {
        views.entry(&section.name);
    }

    for task in tasks {
        let name = task
            .section_id
            .as_deref()
            .and_then(|id| names.get(id).copied())
            .unwrap_or(UNCATEGORIZED);
        tally_task(views.entry(name), task, completed);
    }

    (views, completed.clone())
}

fn tally_task(
    view: &mut SectionView,
    task: &Task,
    completed: &CompletionEvents,
) {
    if completed.contains(&task.id) {
        view.completed_count += 1;
    } else {
        view.incomplete.push(task.content.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> CompletionEvents { list.iter().map(|s| (*s).to_owned()).collect() }

    #[test]
    fn test_kitchen_scenario() {
        let sections = [Section::new("s1", "Kitchen")];
        let tasks = [
            Task::new("t1", "Wash dishes", Some("s1")),
            Task::new("t2", "Sweep floor", Some("s1")),
        ];
        let (views, events) = aggregate(&sections, &tasks, &ids(&["t1"]));

        assert_eq!(views.len(), 1);
        let kitchen = views.get("Kitchen").unwrap();
        assert_eq!(kitchen.incomplete, ["Sweep floor"]);
        assert_eq!(kitchen.completed_count, 1);
        assert_eq!(events, ids(&["t1"]));
    }

    #[test]
    fn test_sections_keep_source_order() {
        let sections = [
            Section::new("3", "Yard"),
            Section::new("1", "Bathroom"),
            Section::new("2", "Kitchen"),
        ];
        let (views, _) = aggregate(&sections, &[], &ids(&[]));
        let names: Vec<&str> = views.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Yard", "Bathroom", "Kitchen"]);
        assert!(views.iter().all(|(_, v)| v.incomplete.is_empty() && v.completed_count == 0));
    }

    #[test]
    fn test_unknown_section_goes_to_uncategorized() {
        let sections = [Section::new("s1", "Kitchen")];
        let tasks = [
            Task::new("t1", "Feed cat", None),
            Task::new("t2", "Water plants", Some("gone")),
            Task::new("t3", "Dust shelves", Some("s1")),
        ];
        let (views, _) = aggregate(&sections, &tasks, &ids(&["t2"]));

        let names: Vec<&str> = views.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Kitchen", UNCATEGORIZED]);
        let other = views.get(UNCATEGORIZED).unwrap();
        assert_eq!(other.incomplete, ["Feed cat"]);
        assert_eq!(other.completed_count, 1);
    }

    #[test]
    fn test_incomplete_keeps_task_order() {
        let sections = [Section::new("s", "Chores")];
        let tasks: Vec<Task> = ["c", "a", "b"].iter().enumerate().map(|(i, c)| Task::new(i.to_string(), *c, Some("s"))).collect();
        let (views, _) = aggregate(&sections, &tasks, &ids(&[]));
        assert_eq!(views.get("Chores").unwrap().incomplete, ["c", "a", "b"]);
    }

    #[test]
    fn test_completion_ids_without_tasks_are_not_counted_in_views() {
        let sections = [Section::new("s", "Chores")];
        let (views, events) = aggregate(&sections, &[], &ids(&["elsewhere"]));
        assert_eq!(views.completed_total(), 0);
        assert_eq!(events, ids(&["elsewhere"]));
    }
}
