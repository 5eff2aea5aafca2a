//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — application state and keyboard event loop
//! - **[`panes`]** — stateless render functions for the chart, the frame
//!   layout listing and the status bar
//! - **[`theme`]** — color palette and color-token mapping
//!
//! [`App`] is the interactive viewer; [`app::draw`] is also used by
//! [`TerminalRenderer`](crate::render::TerminalRenderer) for one-shot output.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
