pub mod debugger;
mod macros;

pub use debugger::{DebugLevel, get_debug_level, set_debug_level, should_log};
