use crate::common::value::Value;
use crate::format::template::Template;
use crate::frontend::script::ast::{Initializer, Spanned, Statement};
use crate::frontend::script::errors::ParseError;
use crate::frontend::script::lexer::{Position, Token, Tokenizer};

/// Parses a whole unit. Nothing is returned unless every line parses.
pub fn parse_unit(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut statements = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(stmt) = parse_line(line, idx + 1)? {
            statements.push(stmt);
        }
    }
    Ok(statements)
}

/// Parses one line; blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Spanned>, ParseError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = Tokenizer::new(line, line_no).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };
    let spanned = parser.statement()?;
    parser.expect_end()?;
    Ok(Some(spanned))
}

struct Parser {
    tokens: Vec<(Token, Position)>,
    pos: usize,
}

impl Parser {
    fn statement(&mut self) -> Result<Spanned, ParseError> {
        let (token, position) = self.advance();

        let stmt = match token {
            Token::Ident(kw) if kw == "let" => {
                let name = self.ident("a binding name")?;
                self.expect(Token::Eq, "'='")?;
                let init = self.initializer()?;
                Statement::Let { name, init }
            }
            Token::Ident(kw) if kw == "print" => {
                // templates are checked here so a bad one rejects the whole unit
                let at = self.peek_position();
                let text = self.string("a template string")?;
                let template = Template::parse(&text).map_err(|e| ParseError::SyntaxError {
                    message: format!("bad template: {e}"),
                    position: at,
                })?;
                Statement::Print { template }
            }
            Token::Ident(kw) if kw == "load" => Statement::Load {
                path: self.string("a unit path")?,
            },
            Token::Ident(kw) if kw == "raise" => Statement::Raise {
                message: self.string("a message string")?,
            },
            Token::Ident(other) => {
                return Err(ParseError::SyntaxError {
                    message: format!("unknown statement '{other}'"),
                    position,
                });
            }
            token => return Err(ParseError::UnexpectedToken { token, position }),
        };

        Ok(Spanned { stmt, position })
    }

    fn initializer(&mut self) -> Result<Initializer, ParseError> {
        if self.peek() != &Token::LBracket {
            return self.literal().map(Initializer::Scalar);
        }
        self.advance();

        let mut elements = Vec::new();
        if self.peek() == &Token::RBracket {
            self.advance();
            return Ok(Initializer::Sequence(elements));
        }

        loop {
            elements.push(self.literal()?);
            let (token, position) = self.advance();
            match token {
                Token::Comma => {}
                Token::RBracket => break,
                other => {
                    return Err(ParseError::Expected {
                        expected: "',' or ']'".into(),
                        found: found(&other),
                        position,
                    });
                }
            }
        }

        Ok(Initializer::Sequence(elements))
    }

    fn literal(&mut self) -> Result<Value, ParseError> {
        let (token, position) = self.advance();
        match token {
            Token::Int(v) => Ok(Value::Int64(v)),
            Token::Float(v) => Ok(Value::Float64(v)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Ident(kw) if kw == "true" => Ok(Value::Bool(true)),
            Token::Ident(kw) if kw == "false" => Ok(Value::Bool(false)),
            other => Err(ParseError::Expected {
                expected: "a literal".into(),
                found: found(&other),
                position,
            }),
        }
    }

    fn ident(&mut self, what: &str) -> Result<String, ParseError> {
        let (token, position) = self.advance();
        match token {
            Token::Ident(name) => Ok(name),
            other => Err(ParseError::Expected {
                expected: what.into(),
                found: found(&other),
                position,
            }),
        }
    }

    fn string(&mut self, what: &str) -> Result<String, ParseError> {
        let (token, position) = self.advance();
        match token {
            Token::String(s) => Ok(s),
            other => Err(ParseError::Expected {
                expected: what.into(),
                found: found(&other),
                position,
            }),
        }
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<(), ParseError> {
        let (token, position) = self.advance();
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: what.into(),
                found: found(&token),
                position,
            })
        }
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        let (token, position) = self.advance();
        match token {
            Token::EOF => Ok(()),
            token => Err(ParseError::UnexpectedToken { token, position }),
        }
    }

    fn peek_position(&self) -> Position {
        self.tokens[self.pos.min(self.tokens.len() - 1)].1
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)].0
    }

    // The tokenizer always ends with EOF, so the last token is sticky.
    fn advance(&mut self) -> (Token, Position) {
        let idx = self.pos.min(self.tokens.len() - 1);
        self.pos += 1;
        self.tokens[idx].clone()
    }
}

fn found(token: &Token) -> Option<String> {
    match token {
        Token::EOF => None,
        other => Some(other.to_string()),
    }
}
