use std::fmt;

use crate::common::types::DataType;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int64(i64),
    Float64(f64),
    Bool(bool),
    String(String),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Int64(_) => DataType::Int64,
            Value::Float64(_) => DataType::Float64,
            Value::Bool(_) => DataType::Bool,
            Value::String(_) => DataType::String,
        }
    }

    /// Source-literal form: text is quoted, everything else matches `Display`.
    pub fn literal(&self) -> String {
        match self {
            Value::String(v) => format!("{v:?}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int64(v) => write!(f, "{v}"),
            // whole floats keep a `.0` so they never read as integers
            Value::Float64(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_datatype_mapping() {
        assert_eq!(Value::Int64(10).data_type(), DataType::Int64);
        assert_eq!(Value::Bool(true).data_type(), DataType::Bool);
        assert_eq!(Value::from("three").data_type(), DataType::String);
    }

    #[test]
    fn value_display_is_canonical_text() {
        assert_eq!(Value::String("three".into()).to_string(), "three");
        assert_eq!(Value::Int64(-7).to_string(), "-7");
        assert_eq!(Value::Float64(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn whole_float_keeps_fraction() {
        assert_eq!(Value::Float64(1.0).to_string(), "1.0");
        assert_eq!(Value::Float64(-3.0).to_string(), "-3.0");
        assert_eq!(Value::Float64(2.50).to_string(), "2.5");
        assert_ne!(Value::Float64(1.0).to_string(), Value::Int64(1).to_string());
    }

    #[test]
    fn literal_quotes_text_only() {
        assert_eq!(Value::from("hi").literal(), "\"hi\"");
        assert_eq!(Value::Int64(3).literal(), "3");
        assert_eq!(Value::Float64(1.0).literal(), "1.0");
    }
}
