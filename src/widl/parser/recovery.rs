//! Local error recovery
//!
//! When a production does not match, the parser skips forward to a stable
//! boundary and keeps the skipped text: a top-level `;`, the brace closing the
//! current group, the start of the next definition, or the end of input.
//! Skipped text is never dropped; it ends up as a junk item or in the `junk`
//! ranges of the enclosing construct or member.

use super::cursor::{Cursor, Nesting};
use crate::widl::lexer::{Lexeme, Token};
use std::ops::Range;

/// Keywords that can only start a definition
const DEFINITION_KEYWORDS: &[&str] = &[
    "callback",
    "dictionary",
    "enum",
    "exception",
    "interface",
    "partial",
    "typedef",
];

fn starts_definition(lexeme: &Lexeme<'_>) -> bool {
    lexeme.token == Token::Identifier && DEFINITION_KEYWORDS.contains(&lexeme.text)
}

/// Finish a member or bodiless definition: expect `;`, skipping anything
/// before it into `junk`
pub(crate) fn terminate(c: &mut Cursor<'_>, junk: &mut Vec<Range<usize>>, top_level: bool) {
    if c.eat(Token::Semicolon).is_some() {
        return;
    }
    if matches!(c.peek_token(), None | Some(Token::CloseBrace)) {
        let end = c.last_end();
        c.warn("missing `;`", end..end);
        return;
    }

    let found = c.describe_next();
    let skipped = c.skip_balanced(Nesting::Unwind, |lexeme| {
        matches!(lexeme.token, Token::Semicolon | Token::CloseBrace)
            || (top_level && starts_definition(lexeme))
    });
    if let Some(range) = skipped {
        c.warn(format!("unexpected {} before `;`", found), range.clone());
        junk.push(range);
    }
    if c.eat(Token::Semicolon).is_none() {
        let end = c.last_end();
        c.warn("missing `;`", end..end);
    }
}

/// Skip an unparsable member up to and including its `;`, or up to the
/// closing brace of the body
pub(crate) fn recover_member(c: &mut Cursor<'_>) -> Option<Range<usize>> {
    let found = c.describe_next();
    let start = c.skip_balanced(Nesting::Unwind, |lexeme| {
        matches!(lexeme.token, Token::Semicolon | Token::CloseBrace)
    })?;
    c.eat(Token::Semicolon);
    let range = start.start..c.last_end();
    c.warn(format!("unrecognized member starting at {}", found), range.clone());
    Some(range)
}

/// Skip an unparsable top-level region. Always consumes at least one token.
pub(crate) fn recover_definition(c: &mut Cursor<'_>) -> Range<usize> {
    let start = c.next_start();
    let found = c.describe_next();
    let mut stack: Vec<Token> = Vec::new();
    let mut first = true;

    while let Some(lexeme) = c.peek().cloned() {
        if stack.is_empty()
            && !first
            && (starts_definition(&lexeme) || lexeme.token == Token::OpenBracket)
        {
            break;
        }
        first = false;
        c.bump();

        let token = lexeme.token;
        if token == Token::Semicolon && stack.is_empty() {
            break;
        }
        if let Some(closer) = token.closer() {
            stack.push(closer);
        } else if let Some(depth) = stack.iter().rposition(|&t| t == token) {
            stack.truncate(depth);
            if stack.is_empty() && token == Token::CloseBrace {
                c.eat(Token::Semicolon);
                break;
            }
        }
    }

    let range = start..c.last_end();
    c.warn(format!("unrecognized definition starting at {}", found), range.clone());
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::config::ParserConfig;
    use crate::widl::lexer::tokenize;

    fn cursor(source: &str) -> Cursor<'_> {
        Cursor::new(source, tokenize(source), ParserConfig::default())
    }

    #[test]
    fn test_terminate_skips_junk() {
        let source = "= error this is; next";
        let mut c = cursor(source);
        let mut junk = Vec::new();
        terminate(&mut c, &mut junk, true);
        assert_eq!(junk, vec![0..15]);
        assert_eq!(c.peek().map(|l| l.text), Some("next"));
    }

    #[test]
    fn test_terminate_at_close_brace() {
        let mut c = cursor("}");
        let mut junk = Vec::new();
        terminate(&mut c, &mut junk, false);
        assert!(junk.is_empty());
        assert!(c.at(Token::CloseBrace));
        assert_eq!(c.into_diagnostics().len(), 1);
    }

    #[test]
    fn test_top_level_terminate_stops_at_definition() {
        let mut c = cursor("oops\ninterface A {};");
        let mut junk = Vec::new();
        terminate(&mut c, &mut junk, true);
        assert_eq!(junk, vec![0..4]);
        assert!(c.at_keyword("interface"));
    }

    #[test]
    fn test_recover_member_stops_before_brace() {
        let mut c = cursor("this is a syntax error, naturally\n};");
        let range = recover_member(&mut c).expect("something to skip");
        assert_eq!(range, 0..33);
        assert!(c.at(Token::CloseBrace));
    }

    #[test]
    fn test_recover_member_includes_semicolon() {
        let mut c = cursor("garbage (x; y); attribute");
        assert_eq!(recover_member(&mut c), Some(0..15));
    }

    #[rstest::rstest]
    #[case::to_semicolon("const long long one= 2   ; enum", 0..26)]
    #[case::unmatched_closers("}foo\ntypedef short x;", 0..4)]
    #[case::through_braces("garbage { a; b; } ; x", 0..19)]
    #[case::before_attributes("foo [Bar] interface", 0..3)]
    #[case::to_end("( unterminated", 0..14)]
    fn test_recover_definition(#[case] source: &str, #[case] expected: Range<usize>) {
        let mut c = cursor(source);
        assert_eq!(recover_definition(&mut c), expected);
    }
}
