//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error type, the helper
//! methods shared by all grammar rules, and the rules for the document
//! structure (testcases, tests, comments). Literal and interval rules live in
//! [`super::literals`] as a second `impl Parser` block.
//!
//! # Grammar
//!
//! ```text
//! document    := [comment] testcase+
//! testcase    := comment* 'testcase' qualident '{' test+ '}'
//! test        := comment* opName inputs? tightestOut? accurateOut? ';'
//! qualident   := identifier ('.' identifier)*
//! inputs      := literal+
//! tightestOut := '=' literal+
//! accurateOut := '<' '=' literal+
//! ```
//!
//! Parsing is fail-fast: the first syntax error aborts the whole file.

use crate::parser::ast::*;
use crate::parser::lexer::{LexDiagnostic, Lexer, Token};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Parse error in {file} at line {}, column {}: {message}",
    .location.line,
    .location.column
)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
    pub file: String,
}

/// Recursive descent parser for ITL files
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    file_name: String,
    diagnostics: Vec<LexDiagnostic>,
}

impl Parser {
    pub fn new(source: &str, file_name: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();
        Self {
            tokens,
            position: 0,
            file_name: file_name.to_string(),
            diagnostics: lexer.diagnostics().to_vec(),
        }
    }

    /// Characters skipped by the lexer while building this parser
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    /// Parse the entire file
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut leading = self.parse_comments();
        // The first comment in front of the first testcase belongs to the file
        let comment = if leading.is_empty() {
            None
        } else {
            Some(leading.remove(0))
        };

        let mut testcases = vec![self.parse_testcase(leading)?];
        while !self.is_at_end() {
            let comments = self.parse_comments();
            testcases.push(self.parse_testcase(comments)?);
        }

        Ok(Document {
            file_name: self.file_name.clone(),
            comment,
            testcases,
        })
    }

    /// Parse `testcase qualident { test+ }`
    fn parse_testcase(&mut self, comments: Vec<Comment>) -> Result<Testcase, ParseError> {
        let location = self.current_location();
        self.expect_token(&Token::Testcase(location), "Expected 'testcase'")?;

        let name = self.parse_qualident()?;

        self.expect_token(
            &Token::LBrace(self.current_location()),
            "Expected '{' after testcase name",
        )?;

        let mut tests = Vec::new();
        loop {
            tests.push(self.parse_test()?);
            if self.check(&Token::RBrace(self.current_location())) {
                break;
            }
        }

        self.expect_token(
            &Token::RBrace(self.current_location()),
            "Expected '}' after tests",
        )?;

        Ok(Testcase {
            name,
            tests,
            comments,
            location,
        })
    }

    /// Parse `opName inputs? ('=' literal+)? ('<' '=' literal+)? ';'`
    fn parse_test(&mut self) -> Result<Test, ParseError> {
        let comments = self.parse_comments();
        let location = self.current_location();
        let op_name = self.parse_op_name()?;

        let inputs = if self.starts_literal() {
            Some(Inputs(self.parse_literal_sequence()?))
        } else {
            None
        };

        let tightest = if self.match_token(&Token::Eq(self.current_location())) {
            Some(TightestOutputs(self.parse_literal_sequence()?))
        } else {
            None
        };

        let accurate = if self.match_token(&Token::Lt(self.current_location())) {
            self.expect_token(&Token::Eq(self.current_location()), "Expected '=' after '<'")?;
            Some(AccurateOutputs(self.parse_literal_sequence()?))
        } else {
            None
        };

        if tightest.is_none() && accurate.is_none() {
            return Err(self.error(format!(
                "Expected '=' or '<=' after operands of '{}', found {}",
                op_name.0,
                self.peek()
            )));
        }

        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "Expected ';' after test",
        )?;

        Test::new(op_name, inputs, tightest, accurate, comments, location)
            .map_err(|e| self.error_at(location, e.to_string()))
    }

    fn parse_op_name(&mut self) -> Result<OperationName, ParseError> {
        match self.peek_token() {
            Token::Ident(name, _) => {
                self.advance();
                Ok(OperationName(name))
            }
            // `inf` is both an interval operation and the infinity literal
            Token::Inf(text, _) if text == "inf" => {
                self.advance();
                Ok(OperationName(text))
            }
            _ => Err(self.error(format!("Expected operation name, found {}", self.peek()))),
        }
    }

    fn parse_qualident(&mut self) -> Result<Qualident, ParseError> {
        let mut parts = vec![self.expect_identifier()?];
        while self.match_token(&Token::Dot(self.current_location())) {
            parts.push(self.expect_identifier()?);
        }
        Ok(Qualident { parts })
    }

    /// Zero or more comments, in source order
    fn parse_comments(&mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        loop {
            match self.peek_token() {
                Token::LineComment(text, loc) => comments.push(Comment::Line(text, loc)),
                Token::BlockComment(text, loc) => comments.push(Comment::Block(text, loc)),
                _ => break,
            }
            self.advance();
        }
        comments
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("{}, found {}", message, self.peek())))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(self.error(format!("Expected identifier, found {}", self.peek())))
        }
    }

    /// Error at the current token
    pub(crate) fn error(&self, message: String) -> ParseError {
        self.error_at(self.current_location(), message)
    }

    pub(crate) fn error_at(&self, location: SourceLocation, message: String) -> ParseError {
        ParseError {
            message,
            location,
            file: self.file_name.clone(),
        }
    }
}
