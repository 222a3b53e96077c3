pub mod config;
pub mod debugger;

pub mod common;
pub mod format;
pub mod frontend;
pub mod holder;
pub mod loader;
pub mod runtime;
