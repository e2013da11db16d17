// Host collaborator seam. The policy modules only read snapshots; every
// mutation of the live arrangement goes through this trait.

use std::path::PathBuf;

use crate::error::ArrangeError;
use crate::state::TabRecord;

/// An editor window holding views grouped in panes.
pub trait Window {
    /// Snapshot of all views, pane-major, with `is_active` set on the focused one.
    fn tabs(&self) -> Vec<TabRecord>;

    fn active_view(&self) -> Option<String>;

    /// Current `(pane, position)` of a view, `None` when it is not placed in this window.
    fn view_index(&self, id: &str) -> Option<(usize, usize)>;

    fn set_view_index(&mut self, id: &str, pane: usize, position: usize) -> Result<(), ArrangeError>;

    fn focus_view(&mut self, id: &str) -> Result<(), ArrangeError>;

    fn close_view(&mut self, id: &str) -> Result<(), ArrangeError>;

    fn status_message(&mut self, message: &str);
}

#[derive(Debug, Clone)]
struct MemoryView {
    id: String,
    path: Option<PathBuf>,
    dirty: bool,
    scratch: bool,
}

/// In-memory window, for tests and for hosts that simulate a layout before
/// applying it.
#[derive(Debug, Default)]
pub struct MemoryWindow {
    panes: Vec<Vec<MemoryView>>,
    active: Option<String>,
    statuses: Vec<String>,
}

impl MemoryWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a view at the end of `pane`, creating panes as needed.
    pub fn add_view(&mut self, id: &str, pane: usize, path: Option<&str>) -> &mut Self {
        if self.panes.len() <= pane {
            self.panes.resize_with(pane + 1, Vec::new);
        }
        self.panes[pane].push(MemoryView {
            id: id.to_string(),
            path: path.map(PathBuf::from),
            dirty: false,
            scratch: false,
        });
        if self.active.is_none() {
            self.active = Some(id.to_string());
        }
        self
    }

    pub fn set_dirty(&mut self, id: &str, dirty: bool) -> &mut Self {
        if let Some(view) = self.view_mut(id) {
            view.dirty = dirty;
        }
        self
    }

    pub fn set_scratch(&mut self, id: &str, scratch: bool) -> &mut Self {
        if let Some(view) = self.view_mut(id) {
            view.scratch = scratch;
        }
        self
    }

    pub fn activate(&mut self, id: &str) -> &mut Self {
        self.active = Some(id.to_string());
        self
    }

    /// View ids of one pane, in tab order.
    pub fn pane_ids(&self, pane: usize) -> Vec<String> {
        self.panes
            .get(pane)
            .map(|views| views.iter().map(|v| v.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }

    fn view_mut(&mut self, id: &str) -> Option<&mut MemoryView> {
        self.panes.iter_mut().flatten().find(|v| v.id == id)
    }

    fn take_view(&mut self, id: &str) -> Result<MemoryView, ArrangeError> {
        let (pane, position) = self
            .view_index(id)
            .ok_or_else(|| ArrangeError::ViewNotFound(id.to_string()))?;
        Ok(self.panes[pane].remove(position))
    }
}

impl Window for MemoryWindow {
    fn tabs(&self) -> Vec<TabRecord> {
        self.panes
            .iter()
            .enumerate()
            .flat_map(|(pane, views)| {
                views.iter().map(move |v| TabRecord {
                    id: v.id.clone(),
                    pane,
                    path: v.path.clone(),
                    is_dirty: v.dirty,
                    is_transient: v.scratch,
                    is_active: self.active.as_deref() == Some(v.id.as_str()),
                })
            })
            .collect()
    }

    fn active_view(&self) -> Option<String> {
        self.active.clone()
    }

    fn view_index(&self, id: &str) -> Option<(usize, usize)> {
        self.panes.iter().enumerate().find_map(|(pane, views)| {
            views
                .iter()
                .position(|v| v.id == id)
                .map(|position| (pane, position))
        })
    }

    fn set_view_index(&mut self, id: &str, pane: usize, position: usize) -> Result<(), ArrangeError> {
        let view = self.take_view(id)?;
        if self.panes.len() <= pane {
            self.panes.resize_with(pane + 1, Vec::new);
        }
        let views = &mut self.panes[pane];
        let position = position.min(views.len());
        views.insert(position, view);
        Ok(())
    }

    fn focus_view(&mut self, id: &str) -> Result<(), ArrangeError> {
        if self.view_index(id).is_none() {
            return Err(ArrangeError::ViewNotFound(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    fn close_view(&mut self, id: &str) -> Result<(), ArrangeError> {
        if self.view_mut(id).is_some_and(|v| v.dirty) {
            return Err(ArrangeError::Host(format!("refusing to close dirty view {}", id)));
        }
        self.take_view(id)?;
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        Ok(())
    }

    fn status_message(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_pane_major() {
        let mut window = MemoryWindow::new();
        window
            .add_view("a", 1, Some("a.txt"))
            .add_view("b", 0, None)
            .add_view("c", 1, Some("c.txt"))
            .activate("c");

        let tabs = window.tabs();
        let ids: Vec<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(tabs.iter().filter(|t| t.is_active).count(), 1);
        assert!(tabs[2].is_active);
    }

    #[test]
    fn test_set_view_index_moves_within_pane() {
        let mut window = MemoryWindow::new();
        window
            .add_view("a", 0, None)
            .add_view("b", 0, None)
            .add_view("c", 0, None);

        window.set_view_index("c", 0, 0).unwrap();
        assert_eq!(window.pane_ids(0), vec!["c", "a", "b"]);
        assert_eq!(window.view_index("b"), Some((0, 2)));
    }

    #[test]
    fn test_close_unknown_and_dirty_views() {
        let mut window = MemoryWindow::new();
        window.add_view("a", 0, None).set_dirty("a", true);

        assert!(matches!(window.close_view("zz"), Err(ArrangeError::ViewNotFound(_))));
        assert!(matches!(window.close_view("a"), Err(ArrangeError::Host(_))));
        assert_eq!(window.pane_ids(0), vec!["a"]);
    }
}
