//! Board - the Dioxus presentation layer over a `Game`
//!
//! Everything here touches the DOM; the game rules live in `crate::game`.

mod browser;
mod cells;
mod page;
mod panel;
mod status;
mod surface;

pub use cells::CellGrid;
pub use page::Board;
pub use panel::DiagnosticsPanel;
pub use surface::install_debug_mode;
