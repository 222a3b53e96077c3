use std::fmt;

use crate::frontend::script::lexer::{Position, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnexpectedToken {
        token: Token,
        position: Position,
    },

    Expected {
        expected: String,
        found: Option<String>,
        position: Position,
    },

    InvalidLiteral {
        literal: String,
        position: Position,
    },

    SyntaxError {
        message: String,
        position: Position,
    },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::Expected { position, .. }
            | ParseError::InvalidLiteral { position, .. }
            | ParseError::SyntaxError { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { token, position } => {
                write!(f, "parse error at {}: unexpected token {}", position, token)
            }

            ParseError::Expected {
                expected,
                found,
                position,
            } => match found {
                Some(fnd) => write!(
                    f,
                    "parse error at {}: expected {}, found {}",
                    position, expected, fnd
                ),
                None => write!(
                    f,
                    "parse error at {}: expected {}, found end of line",
                    position, expected
                ),
            },

            ParseError::InvalidLiteral { literal, position } => {
                write!(
                    f,
                    "parse error at {}: invalid literal '{}'",
                    position, literal
                )
            }

            ParseError::SyntaxError { message, position } => {
                write!(f, "syntax error at {}: {}", position, message)
            }
        }
    }
}

impl std::error::Error for ParseError {}
