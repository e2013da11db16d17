// Tab ordering module - Pure logic + host application
// The pure half never talks to the host; `apply_order` is the only writer.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::ArrangeError;
use crate::host::Window;
use crate::state::{TabRecord, TabStateTable};

/// Target order per pane. Position within a pane is the index in its vector.
pub type Arrangement = BTreeMap<usize, Vec<TabRecord>>;

/// Orders tabs by `(pane, sort_key)`.
///
/// Equal keys compare as `Equal`, so callers must use a stable sort
/// (`slice::sort_by`) to keep untitled tabs in their original relative order.
pub fn compare_tabs(a: &TabRecord, b: &TabRecord) -> Ordering {
    a.pane
        .cmp(&b.pane)
        .then_with(|| a.sort_key().cmp(&b.sort_key()))
}

/// Groups tabs by pane and alphabetizes each pane by file name.
///
/// Untitled tabs get an empty key and land at the front of their pane.
pub fn compute_arrangement(tabs: &[TabRecord]) -> Arrangement {
    let mut sorted = tabs.to_vec();
    sorted.sort_by(compare_tabs);

    let mut arrangement = Arrangement::new();
    for tab in sorted {
        arrangement.entry(tab.pane).or_default().push(tab);
    }
    arrangement
}

/// Pane-major, position-minor view of an arrangement.
pub fn flatten(arrangement: &Arrangement) -> Vec<TabRecord> {
    arrangement.values().flatten().cloned().collect()
}

/// Moves every misplaced view to its target slot and clears its
/// needs-sort flag. Returns the number of moves issued.
pub fn apply_order<W: Window>(
    window: &mut W,
    arrangement: &Arrangement,
    states: &mut TabStateTable,
) -> Result<usize, ArrangeError> {
    let mut moved = 0;
    for (&pane, tabs) in arrangement {
        for (index, tab) in tabs.iter().enumerate() {
            states.clear_needs_sort(&tab.id);
            if window.view_index(&tab.id) != Some((pane, index)) {
                log::debug!("[SortTabs] Moving {} to ({}, {})", tab.id, pane, index);
                window.set_view_index(&tab.id, pane, index)?;
                moved += 1;
            }
        }
    }
    Ok(moved)
}
