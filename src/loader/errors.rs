use std::fmt;
use std::path::PathBuf;

use crate::runtime::errors::ScriptError;

#[derive(Debug)]
pub enum LoadError {
    FileNotFound { path: PathBuf },

    Io { path: PathBuf, message: String },

    /// The unit was found and started, but one of its statements failed.
    Execution {
        path: PathBuf,
        source: Box<ScriptError>,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FileNotFound { path } => {
                write!(f, "load error: no such unit '{}'", path.display())
            }

            LoadError::Io { path, message } => {
                write!(
                    f,
                    "load error: cannot read '{}' ({})",
                    path.display(),
                    message
                )
            }

            LoadError::Execution { path, source } => {
                write!(f, "load error: '{}' failed: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {}
