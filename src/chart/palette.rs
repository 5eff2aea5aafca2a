// Color tokens for the fixed frame slots. Argument colors come from the config.

pub const RETURN_STACK_COLOR: &str = "#f5c2e7";
pub const RETURN_REGISTER_COLOR: &str = "#cba6f7";
pub const LINK_REGISTER_COLOR: &str = "#89b4fa";
pub const FRAME_POINTER_COLOR: &str = "#fab387";
pub const PADDING_COLOR: &str = "#6c7086";
pub const OVERLAY_COLOR: &str = "#f9e2af";
