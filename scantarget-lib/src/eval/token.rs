use std::fmt;

use crate::eval::EvalError;

/// Lexical token of an arithmetic expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

/// A token together with its byte position in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Token { kind, position }
    }
}

/// Split an input string into arithmetic tokens
///
/// Whitespace separates tokens and is otherwise ignored. The alphabet is
/// decimal number literals, the four operators, and parentheses; anything
/// else is rejected with its position.
///
/// # Errors
///
/// Returns an error for a character outside the arithmetic alphabet or a
/// number literal that does not parse to a finite value.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Greedy scan keeps shapes like "1.2.3" in one literal so
                // the error names the whole thing
                let value = literal.parse::<f64>().map_err(|_| EvalError::MalformedNumber {
                    literal: literal.clone(),
                    position,
                })?;
                // parse() turns an out-of-range literal into infinity, not
                // an error
                if !value.is_finite() {
                    return Err(EvalError::MalformedNumber { literal, position });
                }
                tokens.push(Token::new(TokenKind::Number(value), position));
            }
            '+' => {
                tokens.push(Token::new(TokenKind::Plus, position));
                chars.next();
            }
            '-' => {
                tokens.push(Token::new(TokenKind::Minus, position));
                chars.next();
            }
            '*' => {
                tokens.push(Token::new(TokenKind::Star, position));
                chars.next();
            }
            '/' => {
                tokens.push(Token::new(TokenKind::Slash, position));
                chars.next();
            }
            '(' => {
                tokens.push(Token::new(TokenKind::LParen, position));
                chars.next();
            }
            ')' => {
                tokens.push(Token::new(TokenKind::RParen, position));
                chars.next();
            }
            other => {
                return Err(EvalError::UnsupportedChar {
                    ch: other,
                    position,
                })
            }
        }
    }

    Ok(tokens)
}
