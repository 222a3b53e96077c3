use std::fmt;
use std::path::PathBuf;

use crate::debugger::DebugLevel;

/// Command-line configuration of the `valuekit` binary:
/// `valuekit [--debug=LEVEL] [SCRIPT]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub debug_level: DebugLevel,

    /// Root unit to run; `None` starts the interactive session.
    pub script: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            debug_level: DebugLevel::Off,
            script: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidDebugLevel(String),
    UnknownFlag(String),
    UnexpectedArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDebugLevel(level) => {
                write!(f, "invalid debug level '{}'", level)
            }
            ConfigError::UnknownFlag(flag) => write!(f, "unknown flag '{}'", flag),
            ConfigError::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument '{}' (only one script may be given)", arg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl RunConfig {
    /// Parses arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = RunConfig::default();

        for arg in args {
            let arg = arg.into();

            if let Some(level) = arg.strip_prefix("--debug=") {
                config.debug_level = parse_level(level)?;
            } else if arg.starts_with("--") {
                return Err(ConfigError::UnknownFlag(arg));
            } else if config.script.is_some() {
                return Err(ConfigError::UnexpectedArgument(arg));
            } else {
                config.script = Some(PathBuf::from(arg));
            }
        }

        Ok(config)
    }
}

/// Accepts a number (`--debug=3`) or a level name (`--debug=info`).
fn parse_level(level: &str) -> Result<DebugLevel, ConfigError> {
    level
        .parse::<u8>()
        .ok()
        .map(DebugLevel::from_u8)
        .or_else(|| DebugLevel::from_name(level))
        .ok_or_else(|| ConfigError::InvalidDebugLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_interactive_and_quiet() {
        let config = RunConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn parses_script_and_numeric_level() {
        let config = RunConfig::from_args(["--debug=4", "demos/main.vk"]).unwrap();

        assert_eq!(config.debug_level, DebugLevel::Debug);
        assert_eq!(config.script, Some(PathBuf::from("demos/main.vk")));
    }

    #[test]
    fn parses_named_level() {
        let config = RunConfig::from_args(["--debug=trace"]).unwrap();
        assert_eq!(config.debug_level, DebugLevel::Trace);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            RunConfig::from_args(["--debug=loud"]),
            Err(ConfigError::InvalidDebugLevel("loud".into()))
        );
        assert_eq!(
            RunConfig::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".into()))
        );
        assert_eq!(
            RunConfig::from_args(["a.vk", "b.vk"]),
            Err(ConfigError::UnexpectedArgument("b.vk".into()))
        );
    }
}
