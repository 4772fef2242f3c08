//! Token cursor for the recursive-descent parser
//!
//! The cursor walks the full lexeme stream, trivia included, but every query
//! looks at the next significant lexeme. Productions that fail are undone with
//! [`Cursor::checkpoint`] and [`Cursor::rewind`], which also drop diagnostics
//! recorded by the abandoned attempt.

use crate::widl::ast::{Diagnostic, Spanned};
use crate::widl::config::ParserConfig;
use crate::widl::lexer::{Lexeme, Token};
use std::ops::Range;

/// Deepest nesting of types and extended attribute lists the parser descends into
pub(crate) const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
    last_end: usize,
    diagnostics: usize,
}

/// How a skipped region treats a closer that does not match the innermost group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nesting {
    /// Consume it as ordinary text
    IgnoreMismatched,
    /// Close every group up to its opener; if it has none, it may stop the skip
    Unwind,
}

pub(crate) struct Cursor<'a> {
    source: &'a str,
    lexemes: Vec<Lexeme<'a>>,
    pos: usize,
    last_end: usize,
    diagnostics: Vec<Diagnostic>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str, lexemes: Vec<Lexeme<'a>>, config: ParserConfig) -> Self {
        Self {
            source,
            lexemes,
            pos: 0,
            last_end: 0,
            diagnostics: Vec::new(),
            config,
            depth: 0,
        }
    }

    /// Run a nested production, or give up with `None` past [`MAX_NESTING`]
    pub fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_NESTING {
            return None;
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn text(&self, range: &Range<usize>) -> &'a str {
        &self.source[range.clone()]
    }

    fn significant_index(&self, from: usize) -> Option<usize> {
        (from..self.lexemes.len()).find(|&i| !self.lexemes[i].is_trivia())
    }

    pub fn peek(&self) -> Option<&Lexeme<'a>> {
        self.peek_nth(0)
    }

    /// The `n`th significant lexeme ahead (0 is the next one)
    pub fn peek_nth(&self, n: usize) -> Option<&Lexeme<'a>> {
        let mut index = self.significant_index(self.pos)?;
        for _ in 0..n {
            index = self.significant_index(index + 1)?;
        }
        self.lexemes.get(index)
    }

    pub fn peek_token(&self) -> Option<Token> {
        self.peek().map(|lexeme| lexeme.token)
    }

    pub fn at(&self, token: Token) -> bool {
        self.peek_token() == Some(token)
    }

    pub fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// Keywords are contextual: any identifier with the right text
    pub fn at_keyword(&self, keyword: &str) -> bool {
        self.nth_is_keyword(0, keyword)
    }

    pub fn nth_is_keyword(&self, n: usize, keyword: &str) -> bool {
        self.peek_nth(n)
            .is_some_and(|lexeme| lexeme.token == Token::Identifier && lexeme.text == keyword)
    }

    pub fn nth_is(&self, n: usize, token: Token) -> bool {
        self.peek_nth(n).is_some_and(|lexeme| lexeme.token == token)
    }

    /// Byte offset of the cursor, before any pending trivia
    pub fn offset(&self) -> usize {
        self.lexemes
            .get(self.pos)
            .map_or(self.source.len(), |lexeme| lexeme.span.start)
    }

    /// Start of the next significant lexeme, or the end of input
    pub fn next_start(&self) -> usize {
        self.peek().map_or(self.source.len(), |lexeme| lexeme.span.start)
    }

    /// End of the last significant lexeme consumed
    pub fn last_end(&self) -> usize {
        self.last_end
    }

    /// Move past pending trivia
    pub fn skip_trivia(&mut self) {
        if let Some(index) = self.significant_index(self.pos) {
            self.pos = index;
        } else {
            self.pos = self.lexemes.len();
        }
    }

    /// Consume the next significant lexeme
    pub fn bump(&mut self) -> Option<Lexeme<'a>> {
        let index = self.significant_index(self.pos)?;
        let lexeme = self.lexemes[index].clone();
        self.pos = index + 1;
        self.last_end = lexeme.span.end;
        Some(lexeme)
    }

    pub fn eat(&mut self, token: Token) -> Option<Range<usize>> {
        if self.at(token) {
            self.bump().map(|lexeme| lexeme.span)
        } else {
            None
        }
    }

    pub fn eat_keyword(&mut self, keyword: &str) -> Option<Range<usize>> {
        if self.at_keyword(keyword) {
            self.bump().map(|lexeme| lexeme.span)
        } else {
            None
        }
    }

    /// Consume an identifier (including the words `Infinity` and `NaN`)
    pub fn identifier(&mut self) -> Option<Spanned<String>> {
        if self.peek_token()?.is_identifier_like() {
            self.bump()
                .map(|lexeme| Spanned::new(lexeme.text.to_string(), lexeme.span))
        } else {
            None
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            last_end: self.last_end,
            diagnostics: self.diagnostics.len(),
        }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.last_end = checkpoint.last_end;
        self.diagnostics.truncate(checkpoint.diagnostics);
    }

    /// Consume tokens until `stop` accepts one outside any bracketed group.
    /// Returns the range from the first to the last consumed token.
    pub fn skip_balanced(
        &mut self,
        nesting: Nesting,
        stop: impl Fn(&Lexeme<'a>) -> bool,
    ) -> Option<Range<usize>> {
        let start = self.next_start();
        let mut consumed = false;
        let mut stack: Vec<Token> = Vec::new();

        while let Some(lexeme) = self.peek() {
            let token = lexeme.token;
            let outside = stack.is_empty()
                || (nesting == Nesting::Unwind && token.is_closer() && !stack.contains(&token));
            if outside && stop(lexeme) {
                break;
            }
            if let Some(closer) = token.closer() {
                stack.push(closer);
            } else if token.is_closer() {
                if stack.last() == Some(&token) {
                    stack.pop();
                } else if nesting == Nesting::Unwind {
                    if let Some(depth) = stack.iter().rposition(|&t| t == token) {
                        stack.truncate(depth);
                    }
                }
            }
            self.bump();
            consumed = true;
        }

        consumed.then(|| start..self.last_end)
    }

    /// Raw text of a balanced region, trimmed to its first and last tokens
    pub fn raw_until(&mut self, stop: impl Fn(Token) -> bool) -> Option<Spanned<String>> {
        self.skip_balanced(Nesting::Unwind, |lexeme| stop(lexeme.token))
            .map(|range| Spanned::new(self.text(&range).to_string(), range))
    }

    /// Consume one bracketed group, nested groups included
    pub fn balanced_group(&mut self) -> Option<Range<usize>> {
        self.peek_token()?.closer()?;
        let start = self.next_start();
        let mut stack: Vec<Token> = Vec::new();
        while let Some(token) = self.peek_token() {
            if let Some(closer) = token.closer() {
                stack.push(closer);
            } else if let Some(depth) = stack.iter().rposition(|&t| t == token) {
                stack.truncate(depth);
            }
            self.bump();
            if stack.is_empty() {
                return Some(start..self.last_end);
            }
        }
        None
    }

    /// Record a recovered span
    pub fn warn(&mut self, message: impl Into<String>, range: Range<usize>) {
        if self.config.diagnostics {
            self.diagnostics.push(Diagnostic::warning(message, range));
        }
    }

    /// Record accepted legacy syntax
    pub fn note(&mut self, message: impl Into<String>, range: Range<usize>) {
        if self.config.diagnostics && self.config.legacy_notes {
            self.diagnostics.push(Diagnostic::note(message, range));
        }
    }

    /// Describe the next token for diagnostics
    pub fn describe_next(&self) -> String {
        match self.peek() {
            Some(lexeme) => format!("`{}`", lexeme.text),
            None => "end of input".to_string(),
        }
    }
}
