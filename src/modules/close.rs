// Close selection - Pure logic + host application

use crate::error::ArrangeError;
use crate::host::Window;
use crate::settings::CloseSpec;
use crate::state::{TabRecord, TabStateTable};

/// Number of tail tabs targeted before exclusions. Never zero.
pub fn resolve_close_count(spec: CloseSpec, total: usize) -> usize {
    let count = match spec {
        CloseSpec::Count(n) => usize::try_from(n).unwrap_or(usize::MAX),
        CloseSpec::Percent(p) => {
            let count = (total as u128 * u128::from(p)) / 100;
            usize::try_from(count).unwrap_or(usize::MAX)
        }
    };
    if count == 0 {
        1
    } else {
        count
    }
}

/// Picks the last `count` tabs of the pane-major order, then drops the
/// active, dirty and transient ones.
pub fn select_for_closing(
    ordered: &[TabRecord],
    spec: CloseSpec,
    active_id: Option<&str>,
) -> Vec<TabRecord> {
    let count = resolve_close_count(spec, ordered.len());
    let start = ordered.len().saturating_sub(count);

    ordered[start..]
        .iter()
        .filter(|tab| !tab.is_active && active_id != Some(tab.id.as_str()))
        .filter(|tab| !tab.is_dirty && !tab.is_transient)
        .cloned()
        .collect()
}

/// Focuses and closes each selected tab in order, forgetting its state.
/// Returns how many were closed.
pub fn apply_closes<W: Window>(
    window: &mut W,
    selected: &[TabRecord],
    states: &mut TabStateTable,
) -> Result<usize, ArrangeError> {
    let mut closed = 0;
    for tab in selected {
        window.focus_view(&tab.id)?;
        window.close_view(&tab.id)?;
        states.remove(&tab.id);
        closed += 1;
        log::debug!("[SortTabs] Closed {}", tab.id);
    }
    Ok(closed)
}
