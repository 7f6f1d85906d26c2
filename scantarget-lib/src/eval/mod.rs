pub mod token;

use thiserror::Error;

use crate::eval::token::{tokenize, Token, TokenKind};

/// Reasons an input string is rejected by the evaluator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("empty input")]
    EmptyInput,

    #[error("unsupported character '{ch}' at position {position}")]
    UnsupportedChar { ch: char, position: usize },

    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("expression ends unexpectedly")]
    UnexpectedEnd,

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("expression nesting too deep at position {position}")]
    NestingTooDeep { position: usize },

    #[error("division by zero")]
    DivisionByZero,
}

/// Nesting ceiling for grouped and negated subexpressions
const MAX_NESTING_DEPTH: usize = 64;

/// Recursive-descent evaluator over a token stream
///
/// Grammar:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '-' factor | number | '(' expression ')'
/// ```
///
/// Group and unary-minus nesting is capped at `MAX_NESTING_DEPTH` so a
/// deeply nested input is rejected instead of exhausting the stack.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn evaluate(mut self) -> Result<f64, EvalError> {
        let value = self.expression()?;
        // The whole input must be one expression, not a prefix of one
        if let Some(token) = self.peek() {
            return Err(EvalError::TrailingInput {
                position: token.position,
            });
        }
        Ok(value)
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                TokenKind::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.advance();
                    value *= self.factor()?;
                }
                TokenKind::Slash => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        let token = self.advance().ok_or(EvalError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(value),
            TokenKind::Minus => {
                self.descend(token.position)?;
                let value = -self.factor()?;
                self.depth -= 1;
                Ok(value)
            }
            TokenKind::LParen => {
                self.descend(token.position)?;
                let value = self.expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(close) if close.kind == TokenKind::RParen => Ok(value),
                    Some(close) => Err(EvalError::UnexpectedToken {
                        token: close.kind.to_string(),
                        position: close.position,
                    }),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            other => Err(EvalError::UnexpectedToken {
                token: other.to_string(),
                position: token.position,
            }),
        }
    }

    fn descend(&mut self, position: usize) -> Result<(), EvalError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(EvalError::NestingTooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }
}

/// Evaluate a literal arithmetic expression
///
/// # Errors
///
/// Returns an error if the input is empty, contains anything outside
/// literal arithmetic, is not a single complete expression, nests too
/// deeply, or divides by zero.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    if input.trim().is_empty() {
        return Err(EvalError::EmptyInput);
    }
    let tokens = tokenize(input)?;
    Parser::new(tokens).evaluate()
}

/// Process an input string and return the evaluated result as text
///
/// Accepts literal arithmetic only; names, call syntax, statements, and
/// every other shape of input are rejected with an error instead of being
/// evaluated. Whole-number results print without a decimal point, so
/// `"2+2"` yields `"4"`.
///
/// # Errors
///
/// Returns an error for any input that is not a literal arithmetic
/// expression.
pub fn process_input(input: &str) -> Result<String, EvalError> {
    let value = evaluate(input)?;
    Ok(value.to_string())
}
