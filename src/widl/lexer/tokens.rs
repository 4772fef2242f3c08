//! Token definitions for WebIDL
//!
//! This module defines all the tokens that can be produced by the WebIDL lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! Keywords are not tokens of their own. WebIDL lets most keywords appear as
//! names (`attribute boolean required;`), so the lexer emits every word as an
//! [`Token::Identifier`] and the parser decides from context.
use logos::{Lexer, Logos};

/// All possible tokens in WebIDL source
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Trivia
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Special float literals
    #[token("-Infinity")]
    NegativeInfinity,
    #[token("Infinity")]
    Infinity,
    #[token("NaN")]
    NaN,

    // Literals
    #[regex(r"-?([1-9][0-9]*|0[Xx][0-9A-Fa-f]+|0[0-7]*)")]
    Integer,
    #[regex(r"-?(([0-9]+\.[0-9]*|[0-9]*\.[0-9]+)([Ee][+-]?[0-9]+)?|[0-9]+[Ee][+-]?[0-9]+)")]
    Float,
    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r"[_-]?[A-Za-z][0-9A-Z_a-z-]*")]
    Identifier,

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("<")]
    OpenAngle,
    #[token(">")]
    CloseAngle,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("?")]
    Question,
    #[token("...")]
    Ellipsis,

    /// A single character the grammar has no use for. Never produced by logos
    /// itself; the lexer wrapper substitutes it for lexing errors.
    Other,
}

/// Consume a block comment. An unterminated comment runs to the end of input.
fn block_comment(lex: &mut Lexer<'_, Token>) -> bool {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(rest.len()),
    }
    true
}

impl Token {
    /// Whitespace and comments: kept for reconstruction, skipped by the grammar
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment | Token::BlockComment
        )
    }

    /// Tokens that can serve as a name. The special float words are lexed as
    /// literals but remain legal identifiers.
    pub fn is_identifier_like(&self) -> bool {
        matches!(self, Token::Identifier | Token::Infinity | Token::NaN)
    }

    /// Literal tokens accepted as constant values
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Integer
                | Token::Float
                | Token::String
                | Token::Infinity
                | Token::NegativeInfinity
                | Token::NaN
        )
    }

    /// Check if this token opens a bracketed group
    pub fn is_opener(&self) -> bool {
        matches!(
            self,
            Token::OpenParen | Token::OpenBracket | Token::OpenBrace
        )
    }

    /// The closer matching an opener
    pub fn closer(&self) -> Option<Token> {
        match self {
            Token::OpenParen => Some(Token::CloseParen),
            Token::OpenBracket => Some(Token::CloseBracket),
            Token::OpenBrace => Some(Token::CloseBrace),
            _ => None,
        }
    }

    /// Check if this token closes a bracketed group
    pub fn is_closer(&self) -> bool {
        matches!(
            self,
            Token::CloseParen | Token::CloseBracket | Token::CloseBrace
        )
    }
}
