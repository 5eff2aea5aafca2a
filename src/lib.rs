//! # Introduction
//!
//! framechart draws the stack frame of a single function call as three
//! stacked bar columns: the caller's return variable before the call, the
//! full frame during the call, and the return variable again afterwards.
//!
//! ## Pipeline
//!
//! ```text
//! JSON / ChartConfig → validate → FrameLayout → ChartDescription → ChartRenderer
//! ```
//!
//! 1. [`config`] — the input value object and boundary validation of untyped
//!    JSON against a fixed field table.
//! 2. [`layout`] — frame size: return value (if on the stack) + arguments +
//!    link register (4, optional) + frame pointer (4) + padding.
//! 3. [`chart`] — assembles the declarative description: segments per call
//!    phase, axes, annotations and overlay shapes.
//! 4. [`render`] — the renderer capability plus an in-memory container
//!    surface, a JSON writer and a terminal renderer.
//! 5. [`ui`] — ratatui viewer used by the binary; not part of the stable
//!    library API.
//!
//! ## Example
//!
//! ```
//! use framechart::config::{CallArgument, ChartConfig};
//! use framechart::render::{render, RenderOptions, Surface};
//!
//! let config = ChartConfig {
//!     id: "frame".to_string(),
//!     title: "int f(int x)".to_string(),
//!     return_value_size: 4,
//!     return_value_on_call_stack: false,
//!     call_args: vec![CallArgument::new("x", 4, "red")],
//!     link_register: true,
//!     padding: 4,
//!     y_max: 32.0,
//! };
//!
//! let mut surface = Surface::with_containers(["frame"]);
//! render(&config, &mut surface, &RenderOptions::default()).unwrap();
//! assert_eq!(surface.chart("frame").unwrap().frame_size, 16);
//! ```

pub mod chart;
pub mod config;
pub mod layout;
pub mod logging;
pub mod render;
pub mod ui;
