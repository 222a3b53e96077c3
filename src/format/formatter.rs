use std::collections::HashMap;

use crate::common::value::Value;
use crate::debugger::DebugLevel;
use crate::format::errors::FormatError;
use crate::format::template::{Segment, SlotExpr, Template};
use crate::vk_log;

/// Supplies slot values to the formatter.
pub trait SlotResolver {
    fn resolve(&self, slot: &SlotExpr) -> Result<Value, FormatError>;
}

impl SlotResolver for HashMap<String, Value> {
    fn resolve(&self, slot: &SlotExpr) -> Result<Value, FormatError> {
        let value = self
            .get(&slot.name)
            .ok_or_else(|| FormatError::UnboundName(slot.name.clone()))?;

        match slot.index {
            None => Ok(value.clone()),
            Some(_) => Err(FormatError::NotIndexable(slot.name.clone())),
        }
    }
}

/// Renders `template` against `resolver`.
///
/// Every slot is evaluated before anything is concatenated, so a failing
/// slot yields an error and no partial text.
pub fn render(template: &Template, resolver: &dyn SlotResolver) -> Result<String, FormatError> {
    let evaluated = template
        .slots()
        .map(|slot| resolver.resolve(slot).map(|v| v.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    vk_log!(
        DebugLevel::Trace,
        "format",
        "evaluated {} slot(s)",
        evaluated.len()
    );

    let mut evaluated = evaluated.into_iter();
    let mut out = String::new();
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot(_) => {
                if let Some(text) = evaluated.next() {
                    out.push_str(&text);
                }
            }
        }
    }

    Ok(out)
}

/// Parses and renders in one step.
pub fn format(text: &str, resolver: &dyn SlotResolver) -> Result<String, FormatError> {
    render(&Template::parse(text)?, resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn values() -> HashMap<String, Value> {
        hashmap! {
            "value".to_string() => Value::String("three".into()),
            "n".to_string() => Value::Int64(42),
            "ratio".to_string() => Value::Float64(0.5),
            "flag".to_string() => Value::Bool(true),
            "whole".to_string() => Value::Float64(1.0),
            "one".to_string() => Value::Int64(1),
        }
    }

    #[test]
    fn embeds_text_value() {
        assert_eq!(
            format("Test value: {value}", &values()).unwrap(),
            "Test value: three"
        );
    }

    #[test]
    fn uses_canonical_text_for_every_kind() {
        assert_eq!(
            format("{n}|{ratio}|{flag}|{value}", &values()).unwrap(),
            "42|0.5|true|three"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let t = Template::parse("a {n} b {value} c").unwrap();
        let vals = values();

        let first = render(&t, &vals).unwrap();
        let second = render(&t, &vals).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn unbound_name_fails_whole_render() {
        assert_eq!(
            format("ok {n} then {missing}", &values()),
            Err(FormatError::UnboundName("missing".into()))
        );
    }

    #[test]
    fn indexing_a_scalar_fails() {
        assert_eq!(
            format("{n[0]}", &values()),
            Err(FormatError::NotIndexable("n".into()))
        );
    }

    #[test]
    fn whole_float_stays_distinct_from_int() {
        assert_eq!(format("{one} {whole}", &values()).unwrap(), "1 1.0");
    }
}
