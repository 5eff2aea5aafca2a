// Fixed-size frame slots, in bytes

pub const LINK_REGISTER_SIZE: u32 = 4;
pub const FRAME_POINTER_SIZE: u32 = 4;
