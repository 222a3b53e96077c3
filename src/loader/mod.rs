pub mod errors;
pub mod loader;

pub use errors::LoadError;
pub use loader::{Begin, LoadOutcome, ModuleLoader, Unit};
