// Sort Tabs Library Entry Point
// Sorts editor views by file name within each pane and, on request, closes
// the alphabetically last ones. The host editor is reached only through
// `host::Window`.

pub mod error;
pub mod host;
pub mod settings;

// Shared records
pub mod state;

// Policy modules
pub mod modules;

pub use error::ArrangeError;
pub use host::{MemoryWindow, Window};
pub use modules::command::{ArrangeReport, SortTabsCommand};
pub use modules::listener::AutoSortListener;
pub use settings::{CloseSpec, SortTabsArgs};
pub use state::{TabRecord, TabState, TabStateTable};
