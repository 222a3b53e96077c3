pub mod errors;
pub mod namespace;
pub mod runtime;

pub use errors::{NamespaceError, ScriptError};
pub use namespace::{Binding, Namespace};
pub use runtime::Runtime;
