use crate::format::errors::FormatError;
use crate::frontend::script::lexer::{Token, Tokenizer};

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Slot(SlotExpr),
}

/// `name` or `name[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotExpr {
    pub name: String,
    pub index: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Splits `text` into literal and slot segments, in source order.
    /// `{{` and `}}` stand for literal braces.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some(&(_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some(&(_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut slot = String::new();
                    let mut closed = false;
                    for (_, ch) in chars.by_ref() {
                        match ch {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(FormatError::UnbalancedBrace { offset }),
                            _ => slot.push(ch),
                        }
                    }
                    if !closed {
                        return Err(FormatError::UnbalancedBrace { offset });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(SlotExpr::parse(&slot)?));
                }
                '}' => return Err(FormatError::UnbalancedBrace { offset }),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn slots(&self) -> impl Iterator<Item = &SlotExpr> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(expr) => Some(expr),
            Segment::Literal(_) => None,
        })
    }
}

impl SlotExpr {
    pub fn parse(slot: &str) -> Result<Self, FormatError> {
        let invalid = |reason: &str| FormatError::InvalidSlot {
            slot: slot.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<Token> = Tokenizer::new(slot, 1)
            .tokenize()
            .map_err(|e| invalid(&e.to_string()))?
            .into_iter()
            .map(|(t, _)| t)
            .collect();

        match tokens.as_slice() {
            [Token::Ident(name), Token::EOF] => Ok(SlotExpr {
                name: name.clone(),
                index: None,
            }),
            [
                Token::Ident(name),
                Token::LBracket,
                Token::Int(index),
                Token::RBracket,
                Token::EOF,
            ] => Ok(SlotExpr {
                name: name.clone(),
                index: Some(*index),
            }),
            [Token::EOF] => Err(invalid("empty slot")),
            _ => Err(invalid("expected `name` or `name[index]`")),
        }
    }
}
