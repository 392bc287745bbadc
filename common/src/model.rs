//! Value types shared between the task source and the core.
//!
//! Remote responses are mapped onto these at the boundary; nothing in the
//! core sees raw JSON.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Name of the bucket for tasks whose section is missing or unknown.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// An open or recently completed task, as listed by the task source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub section_id: Option<String>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        section_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            section_id: section_id.map(str::to_owned),
        }
    }
}

/// A project section. Order is the task source's response order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub name: String,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ids of the tasks observed as completed in the current lookback window.
pub type CompletionEvents = BTreeSet<String>;

/// Rendering-ready summary of one section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionView {
    /// Content of incomplete tasks, in task source order.
    pub incomplete: Vec<String>,
    /// Number of tasks of this section that are completed.
    pub completed_count: usize,
}

/// Section views keyed by section name, in section order.
///
/// Sections sharing a name share a view, as they are indistinguishable on
/// the board. Equality is order-sensitive.
#[derive(Clone, Debug, Default)]
pub struct SectionViews {
    entries: IndexMap<String, SectionView>,
}

impl SectionViews {
    pub fn new() -> Self { Self::default() }

    /// View for `name`, appended at the end if not present yet.
    pub fn entry(
        &mut self,
        name: &str,
    ) -> &mut SectionView {
        self.entries.entry(name.to_owned()).or_default()
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&SectionView> {
        self.entries.get(name)
    }

    /// Iterate `(name, view)` pairs in section order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionView)> { self.entries.iter().map(|(n, v)| (n.as_str(), v)) }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Total completed tasks across all sections.
    pub fn completed_total(&self) -> usize { self.entries.values().map(|v| v.completed_count).sum() }

    /// Total incomplete tasks across all sections.
    pub fn incomplete_total(&self) -> usize { self.entries.values().map(|v| v.incomplete.len()).sum() }
}

impl PartialEq for SectionViews {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for SectionViews {}

impl<N: Into<String>> FromIterator<(N, SectionView)> for SectionViews {
    fn from_iter<I: IntoIterator<Item = (N, SectionView)>>(iter: I) -> Self {
        let mut views = Self::new();
        for (name, view) in iter {
            let name = name.into();
            let slot = views.entry(&name);
            slot.completed_count += view.completed_count;
            slot.incomplete.extend(view.incomplete);
        }
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_preserves_insertion_order() {
        let mut views = SectionViews::new();
        views.entry("Kitchen");
        views.entry("Garage");
        views.entry("Kitchen").completed_count += 1;

        let names: Vec<&str> = views.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Kitchen", "Garage"]);
        assert_eq!(views.get("Kitchen").unwrap().completed_count, 1);
    }

    #[test]
    fn test_totals() {
        let views: SectionViews = [
            ("A", SectionView { incomplete: vec!["x".into(), "y".into()], completed_count: 1 }),
            ("B", SectionView { incomplete: vec![], completed_count: 3 }),
        ]
        .into_iter()
        .collect();
        assert_eq!(views.completed_total(), 4);
        assert_eq!(views.incomplete_total(), 2);
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn test_duplicate_names_merge_at_first_position() {
        let views: SectionViews = [
            ("Kitchen", SectionView { incomplete: vec!["a".into()], completed_count: 1 }),
            ("Yard", SectionView::default()),
            ("Kitchen", SectionView { incomplete: vec!["b".into()], completed_count: 2 }),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = views.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Kitchen", "Yard"]);
        let kitchen = views.get("Kitchen").unwrap();
        assert_eq!(kitchen.incomplete, ["a", "b"]);
        assert_eq!(kitchen.completed_count, 3);
    }

    #[test]
    fn test_equality_respects_order() {
        let mut ab = SectionViews::new();
        ab.entry("A");
        ab.entry("B");
        let mut ba = SectionViews::new();
        ba.entry("B");
        ba.entry("A");
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }
}
