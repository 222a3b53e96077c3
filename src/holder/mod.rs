pub mod errors;
pub mod holder;

pub use errors::HolderError;
pub use holder::ValueHolder;
