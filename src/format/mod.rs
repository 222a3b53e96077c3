pub mod errors;
pub mod formatter;
pub mod template;

pub use errors::FormatError;
pub use formatter::{SlotResolver, format, render};
pub use template::{Segment, SlotExpr, Template};
