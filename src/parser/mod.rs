//! ITL source parser
//!
//! This module transforms interval test library (ITL) text into an Abstract
//! Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST) for the document structure
//! - [`literals`]: Literal and interval rules, including type inference
//! - [`ast`]: AST node definitions
//!
//! # ITL in brief
//!
//! ```text
//! /* optional file comment */
//! testcase minimal.add {
//!     // one test per line
//!     add [1.0,2.0] [3.0,4.0] = [4.0,6.0];
//!     add [1.0,2.0] [3.0,4.0] <= [3.0,7.0];
//! }
//! ```
//!
//! Lines starting with `#` and `#* ... *#` blocks are ITL-internal comments
//! and never reach the parser; `//` and `/* */` comments are kept and end up
//! in the generated code.
//!
//! # Parser Implementation
//!
//! Hand-written lexer and recursive descent parser. Lexing recovers from
//! illegal characters by skipping them; parsing stops at the first error.

pub mod ast;
pub mod lexer;
pub mod literals;
pub mod parser;

pub use parser::{ParseError, Parser};

/// Parse one ITL file
pub fn parse_document(source: &str, file_name: &str) -> Result<ast::Document, ParseError> {
    Parser::new(source, file_name).parse_document()
}
