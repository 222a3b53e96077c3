use std::fmt;

use crate::holder::errors::HolderError;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    UnbalancedBrace { offset: usize },

    InvalidSlot { slot: String, reason: String },

    UnboundName(String),

    NotIndexable(String),

    HolderRequiresIndex(String),

    Holder(HolderError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnbalancedBrace { offset } => {
                write!(f, "format error: unbalanced brace at offset {}", offset)
            }

            FormatError::InvalidSlot { slot, reason } => {
                write!(f, "format error: invalid slot '{{{}}}' ({})", slot, reason)
            }

            FormatError::UnboundName(name) => {
                write!(f, "format error: '{}' is not defined", name)
            }

            FormatError::NotIndexable(name) => {
                write!(f, "format error: '{}' is not a sequence", name)
            }

            FormatError::HolderRequiresIndex(name) => {
                write!(f, "format error: sequence '{}' needs an index", name)
            }

            FormatError::Holder(e) => write!(f, "format error: {}", e),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<HolderError> for FormatError {
    fn from(e: HolderError) -> Self {
        FormatError::Holder(e)
    }
}
