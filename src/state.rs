// Shared records to avoid circular dependencies between the policy modules.
// These are built by the host adapter and can be tested independently.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One open view, as seen at the start of an arrangement.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TabRecord {
    pub id: String,
    pub pane: usize,
    pub path: Option<PathBuf>,
    pub is_dirty: bool,
    pub is_transient: bool,
    pub is_active: bool,
}

impl TabRecord {
    pub fn new(id: impl Into<String>, pane: usize, path: Option<PathBuf>) -> Self {
        Self {
            id: id.into(),
            pane,
            path,
            is_dirty: false,
            is_transient: false,
            is_active: false,
        }
    }

    /// Lowercase base filename, or an empty key for untitled views.
    pub fn sort_key(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

/// Per-tab bookkeeping kept between arrangements by the host adapter.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct TabState {
    /// Set when a load could not be sorted right away (view not placed yet).
    pub needs_sort: bool,
    pub last_activated: Option<DateTime<Utc>>,
}

/// Explicit tab id -> state map. Entries are inserted when a tab is created
/// and removed when it is closed.
#[derive(Debug, Default)]
pub struct TabStateTable {
    entries: HashMap<String, TabState>,
}

impl TabStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tab. Existing state is kept.
    pub fn insert(&mut self, id: &str) {
        self.entries.entry(id.to_string()).or_default();
    }

    pub fn remove(&mut self, id: &str) -> Option<TabState> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&TabState> {
        self.entries.get(id)
    }

    pub fn needs_sort(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|s| s.needs_sort)
    }

    pub fn mark_needs_sort(&mut self, id: &str) {
        self.entry(id).needs_sort = true;
    }

    pub fn clear_needs_sort(&mut self, id: &str) {
        self.entry(id).needs_sort = false;
    }

    pub fn touch_activated(&mut self, id: &str, now: DateTime<Utc>) {
        self.entry(id).last_activated = Some(now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&mut self, id: &str) -> &mut TabState {
        self.entries.entry(id.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(Some("/src/Banana.PY"), "banana.py")]
    #[case(Some("relative/dir/README.md"), "readme.md")]
    #[case(Some("plain.txt"), "plain.txt")]
    #[case(Some("/"), "")]
    #[case(None, "")]
    fn test_sort_key(#[case] path: Option<&str>, #[case] expected: &str) {
        let tab = TabRecord::new("v1", 0, path.map(PathBuf::from));
        assert_eq!(tab.sort_key(), expected);
    }

    #[test]
    fn test_insert_keeps_existing_state() {
        let mut table = TabStateTable::new();
        table.mark_needs_sort("v1");
        table.insert("v1");

        assert!(table.needs_sort("v1"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_flag_lifecycle() {
        let mut table = TabStateTable::new();
        table.insert("v1");
        assert!(!table.needs_sort("v1"));

        table.mark_needs_sort("v1");
        assert!(table.needs_sort("v1"));

        table.clear_needs_sort("v1");
        assert!(!table.needs_sort("v1"));

        assert!(table.remove("v1").is_some());
        assert!(table.is_empty());
        assert!(!table.needs_sort("v1"));
    }

    #[test]
    fn test_touch_activated_records_timestamp() {
        let mut table = TabStateTable::new();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        table.touch_activated("v2", now);

        assert_eq!(table.get("v2").and_then(|s| s.last_activated), Some(now));
        assert!(!table.needs_sort("v2"));
    }
}
