//! Implementation of the WebIDL lexer
//!
//! Tokenization itself is handled entirely by logos. This wrapper attaches the
//! byte span and source text to every token and guarantees coverage: bytes logos
//! rejects come out as single-character [`Token::Other`] lexemes, so the texts of
//! all lexemes always concatenate to the input.

use crate::widl::lexer::tokens::Token;
use logos::Logos;
use std::collections::VecDeque;
use std::ops::Range;

/// A token together with its location and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub span: Range<usize>,
    pub text: &'a str,
}

impl Lexeme<'_> {
    pub fn is_trivia(&self) -> bool {
        self.token.is_trivia()
    }
}

/// Lazy, restartable lexeme iterator over a source string
#[derive(Clone)]
pub struct WebIdlLexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    pending: VecDeque<Lexeme<'a>>,
    offset: usize,
}

impl<'a> WebIdlLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            pending: VecDeque::new(),
            offset: 0,
        }
    }

    /// Rewind to the start of the source
    pub fn restart(&mut self) {
        self.inner = Token::lexer(self.source);
        self.pending.clear();
        self.offset = 0;
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    fn lexeme(&self, token: Token, span: Range<usize>) -> Lexeme<'a> {
        Lexeme {
            token,
            text: &self.source[span.clone()],
            span,
        }
    }

    /// Queue `range` as one `Other` lexeme per character
    fn queue_unknown(&mut self, range: Range<usize>) {
        let text = &self.source[range.clone()];
        for (index, ch) in text.char_indices() {
            let start = range.start + index;
            let lexeme = self.lexeme(Token::Other, start..start + ch.len_utf8());
            self.pending.push_back(lexeme);
        }
    }
}

impl<'a> Iterator for WebIdlLexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(lexeme) = self.pending.pop_front() {
            self.offset = lexeme.span.end;
            return Some(lexeme);
        }

        match self.inner.next() {
            Some(result) => {
                let span = self.inner.span();
                if span.start > self.offset {
                    self.queue_unknown(self.offset..span.start);
                }
                match result {
                    Ok(token) => {
                        let lexeme = self.lexeme(token, span);
                        self.pending.push_back(lexeme);
                    }
                    Err(()) => self.queue_unknown(span),
                }
                self.next()
            }
            None if self.offset < self.source.len() => {
                self.queue_unknown(self.offset..self.source.len());
                self.next()
            }
            None => None,
        }
    }
}

/// Convenience function to tokenize a string, trivia included
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    WebIdlLexer::new(source).collect()
}

/// Tokenize and drop whitespace and comments
pub fn tokenize_significant(source: &str) -> Vec<Lexeme<'_>> {
    WebIdlLexer::new(source)
        .filter(|lexeme| !lexeme.is_trivia())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|l| l.token).collect()
    }

    #[test]
    fn test_simple_tokenization() {
        assert_eq!(
            kinds("interface Foo {};"),
            vec![
                Token::Identifier,
                Token::Whitespace,
                Token::Identifier,
                Token::Whitespace,
                Token::OpenBrace,
                Token::CloseBrace,
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_spans_and_text() {
        let lexemes = tokenize("a  b");
        assert_eq!(lexemes[0].span, 0..1);
        assert_eq!(lexemes[1].span, 1..3);
        assert_eq!(lexemes[1].text, "  ");
        assert_eq!(lexemes[2].text, "b");
    }

    #[test]
    fn test_unknown_characters_become_single_char_tokens() {
        let lexemes = tokenize("a!ø");
        assert_eq!(
            lexemes.iter().map(|l| l.token).collect::<Vec<_>>(),
            vec![Token::Identifier, Token::Other, Token::Other]
        );
        assert_eq!(lexemes[2].text, "ø");
    }

    #[test]
    fn test_unterminated_string_is_recovered() {
        let lexemes = tokenize("\"abc");
        assert_eq!(lexemes[0].token, Token::Other);
        assert_eq!(lexemes[0].text, "\"");
        let rebuilt: String = lexemes.iter().map(|l| l.text).collect();
        assert_eq!(rebuilt, "\"abc");
    }

    #[test]
    fn test_coverage_is_exact() {
        let source = "[ha!] attribute short bar getraises (an, exception); // éß\n\u{feff}";
        let rebuilt: String = tokenize(source).iter().map(|l| l.text).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_restart() {
        let mut lexer = WebIdlLexer::new("a b");
        assert_eq!(lexer.by_ref().count(), 3);
        lexer.restart();
        assert_eq!(lexer.next().map(|l| l.text), Some("a"));
    }

    #[test]
    fn test_significant_tokens() {
        let lexemes = tokenize_significant("a /* c */ b // d");
        assert_eq!(
            lexemes.iter().map(|l| l.text).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
