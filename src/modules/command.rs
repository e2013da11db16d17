// Sort command - drives the order and close policies against a host window.

use serde::Serialize;

use crate::error::ArrangeError;
use crate::host::Window;
use crate::modules::close::{apply_closes, select_for_closing};
use crate::modules::order::{apply_order, compute_arrangement, flatten};
use crate::settings::SortTabsArgs;
use crate::state::TabStateTable;

const DESCRIPTION: &str = "Sort Tabs by file name";

/// What one invocation did.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ArrangeReport {
    pub moved: usize,
    pub closed: Vec<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SortTabsCommand;

impl SortTabsCommand {
    /// Label shown in status messages.
    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Sorts (and optionally closes) views, then refocuses the view that was
    /// active when the command started.
    ///
    /// Closing works on the freshly computed order, so with `sort` and `close`
    /// both set the tabs closed are the alphabetically last ones.
    pub fn run<W: Window>(
        &self,
        window: &mut W,
        states: &mut TabStateTable,
        args: &SortTabsArgs,
    ) -> Result<ArrangeReport, ArrangeError> {
        let current_view = window.active_view();
        let tabs = window.tabs();
        log::info!(
            "[SortTabs] Running on {} view(s), sort={}, close={:?}",
            tabs.len(),
            args.sort,
            args.close
        );

        let arrangement = compute_arrangement(&tabs);
        let mut report = ArrangeReport::default();

        if args.sort {
            report.moved = apply_order(window, &arrangement, states)?;
            report.message = Some(self.description().to_string());
            log::info!("[SortTabs] Moved {} view(s)", report.moved);
        }

        if let Some(spec) = args.close {
            let selected = select_for_closing(&flatten(&arrangement), spec, current_view.as_deref());
            let closed = apply_closes(window, &selected, states)?;
            report.closed = selected.into_iter().map(|t| t.id).collect();
            report.message = Some(format!(
                "Closed {} view(s) using {}",
                closed,
                self.description()
            ));
            log::info!("[SortTabs] Closed {} view(s)", closed);
        }

        if let Some(message) = &report.message {
            window.status_message(message);
        }

        if let Some(id) = current_view {
            window.focus_view(&id)?;
        }

        Ok(report)
    }
}
