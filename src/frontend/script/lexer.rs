use std::fmt;

use crate::frontend::script::errors::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // identifiers & keywords
    Ident(String),

    // literals
    Int(i64),
    Float(f64),
    String(String),

    // punctuation
    LBracket,
    RBracket,
    Comma,
    Eq,

    EOF,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "'{s}'"),
            Token::Int(v) => write!(f, "{v}"),
            Token::Float(v) => write!(f, "{v}"),
            Token::String(s) => write!(f, "{s:?}"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::Comma => write!(f, "','"),
            Token::Eq => write!(f, "'='"),
            Token::EOF => write!(f, "end of line"),
        }
    }
}

/// Tokenizes a single line of a unit, or the inside of a template slot.
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, line: usize) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line,
        }
    }

    pub fn next_token(&mut self) -> Result<(Token, Position), ParseError> {
        self.skip_whitespace();

        let (start, c) = match self.chars.next() {
            Some(next) => next,
            None => return Ok((Token::EOF, self.at(self.input.len()))),
        };
        let position = self.at(start);

        let token = match c {
            // ---------- punctuation ----------
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ',' => Token::Comma,
            '=' => Token::Eq,

            // ---------- string literal ----------
            '"' => self.string_literal(position)?,

            // ---------- number ----------
            '-' if matches!(self.chars.peek(), Some(&(_, d)) if d.is_ascii_digit()) => {
                self.number_literal('-', position)?
            }
            c if c.is_ascii_digit() => self.number_literal(c, position)?,

            // ---------- identifier ----------
            c if is_ident_start(c) => {
                let mut ident = c.to_string();
                while let Some(&(_, ch)) = self.chars.peek() {
                    if is_ident_continue(ch) {
                        ident.push(ch);
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(ident)
            }

            other => {
                return Err(ParseError::SyntaxError {
                    message: format!("unexpected character '{other}'"),
                    position,
                });
            }
        };

        Ok((token, position))
    }

    /// Collects every remaining token, `EOF` included.
    pub fn tokenize(mut self) -> Result<Vec<(Token, Position)>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let next = self.next_token()?;
            let done = next.0 == Token::EOF;
            tokens.push(next);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn string_literal(&mut self, position: Position) -> Result<Token, ParseError> {
        let mut s = String::new();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(Token::String(s)),
                '\\' => match self.chars.next() {
                    Some((_, '"')) => s.push('"'),
                    Some((_, '\\')) => s.push('\\'),
                    Some((_, 'n')) => s.push('\n'),
                    Some((_, 't')) => s.push('\t'),
                    Some((_, other)) => {
                        return Err(ParseError::SyntaxError {
                            message: format!("unknown escape '\\{other}'"),
                            position,
                        });
                    }
                    None => break,
                },
                _ => s.push(ch),
            }
        }

        Err(ParseError::SyntaxError {
            message: "unterminated string literal".into(),
            position,
        })
    }

    fn number_literal(&mut self, first: char, position: Position) -> Result<Token, ParseError> {
        let mut num = first.to_string();
        let mut is_float = false;

        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                num.push(ch);
                self.chars.next();
            } else if ch == '.' && !is_float {
                // only a float when a digit follows the dot
                let mut ahead = self.chars.clone();
                ahead.next();
                if !matches!(ahead.peek(), Some(&(_, d)) if d.is_ascii_digit()) {
                    break;
                }
                is_float = true;
                num.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }

        let invalid = || ParseError::InvalidLiteral {
            literal: num.clone(),
            position,
        };

        if is_float {
            num.parse().map(Token::Float).map_err(|_| invalid())
        } else {
            num.parse().map(Token::Int).map_err(|_| invalid())
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    // columns count characters, not bytes
    fn at(&self, offset: usize) -> Position {
        Position {
            line: self.line,
            column: self.input[..offset].chars().count() + 1,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
