use crate::common::value::Value;
use crate::format::template::Template;
use crate::frontend::script::lexer::Position;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let { name: String, init: Initializer },
    Print { template: Template },
    Load { path: String },
    Raise { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    Scalar(Value),
    Sequence(Vec<Value>),
}

impl Initializer {
    /// Source form, for diagnostics.
    pub fn literal(&self) -> String {
        match self {
            Initializer::Scalar(v) => v.literal(),
            Initializer::Sequence(items) => {
                let items: Vec<String> = items.iter().map(Value::literal).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

/// A statement together with where it starts in its unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub stmt: Statement,
    pub position: Position,
}
