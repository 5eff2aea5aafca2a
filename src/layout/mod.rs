//! Stack-frame size computation
//!
//! The frame of the called function is modelled as a stack of slots:
//!
//! ```text
//! frame = return value (if on stack) + Σ argument sizes
//!       + link register (4, optional) + frame pointer (4) + padding
//! ```
//!
//! The caller's return variable sits directly below the frame, so the frame
//! occupies `[return_value_size, return_value_size + size)` on the y-axis.

pub mod constants;

use crate::config::ChartConfig;
use constants::{FRAME_POINTER_SIZE, LINK_REGISTER_SIZE};
use serde::Serialize;

/// Per-slot byte contributions to the frame of one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLayout {
    /// Return value written into the frame; 0 when returned in a register
    pub return_value: u64,
    pub arguments: u64,
    pub link_register: u64,
    pub frame_pointer: u64,
    pub padding: u64,
}

impl FrameLayout {
    pub fn from_config(config: &ChartConfig) -> Self {
        FrameLayout {
            return_value: if config.return_value_on_call_stack {
                u64::from(config.return_value_size)
            } else {
                0
            },
            arguments: config.call_args.iter().map(|arg| u64::from(arg.size)).sum(),
            link_register: if config.link_register {
                u64::from(LINK_REGISTER_SIZE)
            } else {
                0
            },
            frame_pointer: u64::from(FRAME_POINTER_SIZE),
            padding: u64::from(config.padding),
        }
    }

    /// Total frame size in bytes
    pub fn size(&self) -> u64 {
        self.return_value + self.arguments + self.link_register + self.frame_pointer + self.padding
    }

    /// Vertical extent of the frame above a return variable of `base` bytes
    pub fn region(&self, base: u32) -> (u64, u64) {
        let bottom = u64::from(base);
        (bottom, bottom + self.size())
    }
}
