//! TUI pane rendering modules
//!
//! - [`chart`]: stacked-bar chart with axes, overlays and annotations
//! - [`frame`]: slot-by-slot listing of the selected column
//! - [`status`]: status bar with keybindings and attribution
//!
//! Each pane exports a `render_*` function taking the frame, its area and
//! borrowed render data; panes hold no state of their own.

pub mod chart;
pub mod frame;
pub mod status;

pub use chart::{draw_chart, render_chart_pane};
pub use frame::render_frame_pane;
pub use status::{render_status_bar, StatusRenderData};
