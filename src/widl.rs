//! Main module for widl library functionality
//!
//! Data flows leaves first: `lexer` produces lexemes, `parser` builds the
//! [`ast::Document`], and `lookup`, `normalize`, `formats` and `complexity`
//! consume the finished tree without mutating it.

pub mod ast;
pub mod biblio;
pub mod complexity;
pub mod config;
pub mod formats;
pub mod lexer;
pub mod lookup;
pub mod normalize;
pub mod parser;
pub mod testing;
