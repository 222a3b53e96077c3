use std::fmt;

use crate::{
    format::errors::FormatError, frontend::script::errors::ParseError,
    holder::errors::HolderError, loader::errors::LoadError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum NamespaceError {
    AlreadyDefined(String),
}

impl fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceError::AlreadyDefined(name) => {
                write!(f, "namespace error: '{}' is already defined", name)
            }
        }
    }
}

impl std::error::Error for NamespaceError {}

#[derive(Debug)]
pub enum ScriptError {
    Parse(ParseError),
    Format(FormatError),
    Namespace(NamespaceError),
    Load(LoadError),
    Raised { message: String },
    Io { message: String },
}

impl ScriptError {
    /// The out-of-range read behind this error, looking through failed loads.
    pub fn holder_error(&self) -> Option<&HolderError> {
        match self {
            ScriptError::Format(FormatError::Holder(e)) => Some(e),
            ScriptError::Load(LoadError::Execution { source, .. }) => source.holder_error(),
            _ => None,
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Parse(e) => write!(f, "{e}"),
            ScriptError::Format(e) => write!(f, "{e}"),
            ScriptError::Namespace(e) => write!(f, "{e}"),
            ScriptError::Load(e) => write!(f, "{e}"),
            ScriptError::Raised { message } => write!(f, "raised: {message}"),
            ScriptError::Io { message } => write!(f, "output error: {message}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<ParseError> for ScriptError {
    fn from(e: ParseError) -> Self {
        ScriptError::Parse(e)
    }
}

impl From<FormatError> for ScriptError {
    fn from(e: FormatError) -> Self {
        ScriptError::Format(e)
    }
}

impl From<HolderError> for ScriptError {
    fn from(e: HolderError) -> Self {
        ScriptError::Format(FormatError::Holder(e))
    }
}

impl From<NamespaceError> for ScriptError {
    fn from(e: NamespaceError) -> Self {
        ScriptError::Namespace(e)
    }
}

impl From<LoadError> for ScriptError {
    fn from(e: LoadError) -> Self {
        ScriptError::Load(e)
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io {
            message: e.to_string(),
        }
    }
}
