//! Detokenizer for WebIDL
//!
//! Converts a stream of lexemes back into a string. Every lexeme carries its
//! exact source text, so detokenizing a full token stream reproduces the input.
use crate::widl::lexer::lexer_impl::Lexeme;

/// Detokenize a stream of lexemes into a string
pub fn detokenize(lexemes: &[Lexeme<'_>]) -> String {
    let capacity = lexemes.iter().map(|l| l.text.len()).sum();
    let mut result = String::with_capacity(capacity);
    for lexeme in lexemes {
        result.push_str(lexeme.text);
    }
    result
}
