use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HolderError {
    OutOfRange { index: i64, len: usize },
}

impl fmt::Display for HolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolderError::OutOfRange { index, len } => {
                write!(
                    f,
                    "index {} out of range for sequence of length {}",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for HolderError {}
