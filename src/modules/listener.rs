// Event triggers - the host forwards editor notifications here.
//
// A view loaded before it is placed in a pane cannot be sorted yet; it is
// flagged and picked up on its next activation.

use chrono::{DateTime, Utc};

use crate::error::ArrangeError;
use crate::host::Window;
use crate::modules::command::SortTabsCommand;
use crate::settings::SortTabsArgs;
use crate::state::TabStateTable;

#[derive(Debug, Default)]
pub struct AutoSortListener {
    states: TabStateTable,
    command: SortTabsCommand,
}

impl AutoSortListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &TabStateTable {
        &self.states
    }

    pub fn on_new(&mut self, id: &str) {
        self.states.insert(id);
    }

    pub fn on_close(&mut self, id: &str) {
        self.states.remove(id);
    }

    pub fn on_load<W: Window>(&mut self, window: &mut W, id: &str) -> Result<bool, ArrangeError> {
        let sorted = self.run_sort(window, id)?;
        if !sorted {
            log::debug!("[AutoSort] {} not placed yet, deferring sort", id);
            self.states.mark_needs_sort(id);
        }
        Ok(sorted)
    }

    pub fn on_post_save<W: Window>(&mut self, window: &mut W, id: &str) -> Result<bool, ArrangeError> {
        self.run_sort(window, id)
    }

    pub fn on_activated<W: Window>(
        &mut self,
        window: &mut W,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, ArrangeError> {
        self.states.touch_activated(id, now);
        if !self.states.needs_sort(id) {
            return Ok(false);
        }
        let sorted = self.run_sort(window, id)?;
        if sorted {
            self.states.clear_needs_sort(id);
        }
        Ok(sorted)
    }

    fn run_sort<W: Window>(&mut self, window: &mut W, id: &str) -> Result<bool, ArrangeError> {
        if window.view_index(id).is_none() {
            return Ok(false);
        }
        self.command
            .run(window, &mut self.states, &SortTabsArgs::default())?;
        Ok(true)
    }
}
