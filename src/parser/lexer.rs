//! Lexer (tokenizer) for ITL test files
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Numeric constants follow the C99 integer and floating constant grammar so
//! that the parser can infer a literal's type from its suffix. `#` and
//! `#* ... *#` comments are dropped, while `//` and `/* ... */` comments are
//! kept as tokens because they are carried into the generated code.
//!
//! Lexing never fails: an unrecognised character is reported as a
//! [`LexDiagnostic`], skipped, and scanning resumes at the next character.

use super::ast::{Decoration, OverlapRelation, SourceLocation};
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals, kept as written (sign and suffix included)
    IntLiteral(String, SourceLocation),
    FloatLiteral(String, SourceLocation),
    StringLiteral(String, SourceLocation),
    Inf(String, SourceLocation),
    Nai(String, SourceLocation),
    Empty(String, SourceLocation),
    Entire(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Testcase(SourceLocation),
    True(SourceLocation),
    False(SourceLocation),
    Decoration(Decoration, SourceLocation),
    Overlap(OverlapRelation, SourceLocation),

    // Comments that survive into the generated code
    LineComment(String, SourceLocation),
    BlockComment(String, SourceLocation),

    // Punctuation
    LBrace(SourceLocation),     // {
    RBrace(SourceLocation),     // }
    LBracket(SourceLocation),   // [
    RBracket(SourceLocation),   // ]
    Semicolon(SourceLocation),  // ;
    Comma(SourceLocation),      // ,
    Dot(SourceLocation),        // .
    Eq(SourceLocation),         // =
    Lt(SourceLocation),         // <
    Underscore(SourceLocation), // _

    // End of file
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::FloatLiteral(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::Inf(_, loc)
            | Token::Nai(_, loc)
            | Token::Empty(_, loc)
            | Token::Entire(_, loc)
            | Token::Ident(_, loc)
            | Token::Testcase(loc)
            | Token::True(loc)
            | Token::False(loc)
            | Token::Decoration(_, loc)
            | Token::Overlap(_, loc)
            | Token::LineComment(_, loc)
            | Token::BlockComment(_, loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Dot(loc)
            | Token::Eq(loc)
            | Token::Lt(loc)
            | Token::Underscore(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(s, _) => write!(f, "integer literal {}", s),
            Token::FloatLiteral(s, _) => write!(f, "float literal {}", s),
            Token::StringLiteral(s, _) => write!(f, "string literal {}", s),
            Token::Inf(s, _)
            | Token::Nai(s, _)
            | Token::Empty(s, _)
            | Token::Entire(s, _) => write!(f, "'{}'", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Testcase(_) => write!(f, "'testcase'"),
            Token::True(_) => write!(f, "'true'"),
            Token::False(_) => write!(f, "'false'"),
            Token::Decoration(d, _) => write!(f, "decoration '{}'", d.name()),
            Token::Overlap(o, _) => write!(f, "overlap relation '{}'", o.name()),
            Token::LineComment(_, _) => write!(f, "line comment"),
            Token::BlockComment(_, _) => write!(f, "block comment"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::LBracket(_) => write!(f, "'['"),
            Token::RBracket(_) => write!(f, "']'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Dot(_) => write!(f, "'.'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Underscore(_) => write!(f, "'_'"),
            Token::Eof(_) => write!(f, "end of file"),
        }
    }
}

/// A character the lexer could not place in any token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Illegal character '{character}' in line {}", .location.line)]
pub struct LexDiagnostic {
    pub character: char,
    pub location: SourceLocation,
}

/// Lexer for ITL source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    diagnostics: Vec<LexDiagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input. The stream always ends with [`Token::Eof`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_hash_comments();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            match self.next_token() {
                Some(token) => tokens.push(token),
                None => self.skip_illegal_character(),
            }
        }

        tokens
    }

    /// Characters that were skipped during [`Lexer::tokenize`]
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    /// Get next token, or `None` if the current character starts no token.
    /// Nothing is consumed when `None` is returned.
    fn next_token(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let ch = self.peek()?;

        match ch {
            '/' => match self.peek_ahead(1) {
                Some('/') => Some(self.line_comment(loc)),
                Some('*') => self.block_comment(loc),
                _ => None,
            },
            '"' => self.string_literal(loc),
            '+' | '-' => self.signed_literal(loc),
            '0'..='9' => Some(self.number_literal(loc, self.position)),
            '.' if self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) => {
                Some(self.number_literal(loc, self.position))
            }
            'a'..='z' | 'A'..='Z' => Some(self.word(loc)),
            _ => {
                let token = match ch {
                    '{' => Token::LBrace(loc),
                    '}' => Token::RBrace(loc),
                    '[' => Token::LBracket(loc),
                    ']' => Token::RBracket(loc),
                    ';' => Token::Semicolon(loc),
                    ',' => Token::Comma(loc),
                    '.' => Token::Dot(loc),
                    '=' => Token::Eq(loc),
                    '<' => Token::Lt(loc),
                    '_' => Token::Underscore(loc),
                    _ => return None,
                };
                self.advance();
                Some(token)
            }
        }
    }

    /// `// ...` up to, not including, the newline
    fn line_comment(&mut self, loc: SourceLocation) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        Token::LineComment(text, loc)
    }

    /// `/* ... */`, delimiters included
    fn block_comment(&mut self, loc: SourceLocation) -> Option<Token> {
        let end = self.find_from(self.position + 2, &['*', '/'])?;
        let text = self.take_until(end + 2);
        Some(Token::BlockComment(text, loc))
    }

    /// String literal kept verbatim, quotes and escapes included.
    /// A raw newline ends the string unsuccessfully.
    fn string_literal(&mut self, loc: SourceLocation) -> Option<Token> {
        let mut pos = self.position + 1;
        loop {
            match self.input.get(pos) {
                Some('"') => break,
                Some('\\') if pos + 1 < self.input.len() => pos += 2,
                Some('\n') | Some('\\') | None => return None,
                Some(_) => pos += 1,
            }
        }
        let text = self.take_until(pos + 1);
        Some(Token::StringLiteral(text, loc))
    }

    /// `+`/`-` directly followed by a number or by `inf`
    fn signed_literal(&mut self, loc: SourceLocation) -> Option<Token> {
        let start = self.position;
        match self.peek_ahead(1) {
            Some(c) if c.is_ascii_digit() => Some(self.number_literal(loc, start + 1)),
            Some('.') if self.peek_ahead(2).is_some_and(|c| c.is_ascii_digit()) => {
                Some(self.number_literal(loc, start + 1))
            }
            Some('i') => {
                let end = self.word_end(start + 1);
                let word: String = self.input[start + 1..end].iter().collect();
                if special_suffix(&word, "inf").is_some() {
                    Some(Token::Inf(self.take_until(end), loc))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Integer or floating constant starting at `digits_start` (after any sign)
    fn number_literal(&mut self, loc: SourceLocation, digits_start: usize) -> Token {
        let (end, is_float) = self.scan_number(digits_start);
        let text = self.take_until(end);
        if is_float {
            Token::FloatLiteral(text, loc)
        } else {
            Token::IntLiteral(text, loc)
        }
    }

    /// Find the end of a C99 numeric constant. Returns the end index and
    /// whether the constant is floating.
    fn scan_number(&self, start: usize) -> (usize, bool) {
        let is_hex = matches!(self.char_at(start), Some('0'))
            && matches!(self.char_at(start + 1), Some('x') | Some('X'))
            && self
                .char_at(start + 2)
                .is_some_and(|c| c.is_ascii_hexdigit() || c == '.');

        if is_hex {
            let digits_start = start + 2;
            let int_end = self.run_end(digits_start, |c| c.is_ascii_hexdigit());
            let mut pos = int_end;
            if self.char_at(pos) == Some('.') {
                pos = self.run_end(pos + 1, |c| c.is_ascii_hexdigit());
            }
            let has_digits = pos > digits_start + usize::from(pos > int_end);
            if has_digits {
                if let Some(exp_end) = self.exponent_end(pos, &['p', 'P']) {
                    return (self.float_suffix_end(exp_end), true);
                }
            }
            // Hex floats need a binary exponent; fall back to the integer part
            if int_end > digits_start {
                return (self.int_suffix_end(int_end), false);
            }
            // `0x.` without digits: only the leading zero is a constant
            return (self.int_suffix_end(start + 1), false);
        }

        let int_end = self.run_end(start, |c| c.is_ascii_digit());
        let mut pos = int_end;
        let mut is_float = false;

        if self.char_at(pos) == Some('.') {
            let frac_end = self.run_end(pos + 1, |c| c.is_ascii_digit());
            if frac_end > pos + 1 || int_end > start {
                pos = frac_end;
                is_float = true;
            }
        }

        if let Some(exp_end) = self.exponent_end(pos, &['e', 'E']) {
            pos = exp_end;
            is_float = true;
        }

        if is_float {
            (self.float_suffix_end(pos), true)
        } else {
            (self.int_suffix_end(pos), false)
        }
    }

    /// End of `[eE][+-]?digits` (or `pP` for hex) starting at `pos`
    fn exponent_end(&self, pos: usize, markers: &[char]) -> Option<usize> {
        let marker = self.char_at(pos)?;
        if !markers.contains(&marker) {
            return None;
        }
        let mut digits = pos + 1;
        if matches!(self.char_at(digits), Some('+') | Some('-')) {
            digits += 1;
        }
        let end = self.run_end(digits, |c| c.is_ascii_digit());
        (end > digits).then_some(end)
    }

    fn float_suffix_end(&self, pos: usize) -> usize {
        match self.char_at(pos) {
            Some('f') | Some('F') | Some('l') | Some('L') => pos + 1,
            _ => pos,
        }
    }

    /// Take the longest valid C integer suffix (at most three characters)
    fn int_suffix_end(&self, pos: usize) -> usize {
        for len in (1..=3).rev() {
            if pos + len > self.input.len() {
                continue;
            }
            let candidate: String = self.input[pos..pos + len].iter().collect();
            if is_int_suffix(&candidate) {
                return pos + len;
            }
        }
        pos
    }

    /// Identifier or keyword
    fn word(&mut self, loc: SourceLocation) -> Token {
        let end = self.word_end(self.position);
        let word = self.take_until(end);

        match word.as_str() {
            "testcase" => return Token::Testcase(loc),
            "true" => return Token::True(loc),
            "false" => return Token::False(loc),
            "trv" => return Token::Decoration(Decoration::Trv, loc),
            "def" => return Token::Decoration(Decoration::Def, loc),
            "dac" => return Token::Decoration(Decoration::Dac, loc),
            "com" => return Token::Decoration(Decoration::Com, loc),
            "ill" => return Token::Decoration(Decoration::Ill, loc),
            _ => {}
        }

        if let Some(rel) = OverlapRelation::from_name(&word) {
            return Token::Overlap(rel, loc);
        }
        if special_suffix(&word, "inf").is_some() {
            return Token::Inf(word, loc);
        }
        if special_suffix(&word, "nai").is_some() {
            return Token::Nai(word, loc);
        }
        if special_suffix(&word, "empty").is_some() {
            return Token::Empty(word, loc);
        }
        if special_suffix(&word, "entire").is_some() {
            return Token::Entire(word, loc);
        }

        Token::Ident(word, loc)
    }

    /// Skip whitespace and the comments that never reach the parser
    fn skip_whitespace_and_hash_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('#') => {
                    let block_end = if self.peek_ahead(1) == Some('*') {
                        self.find_from(self.position + 2, &['*', '#'])
                    } else {
                        None
                    };
                    match block_end {
                        Some(end) => {
                            while self.position < end + 2 {
                                self.advance();
                            }
                        }
                        None => self.skip_line(),
                    }
                }
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_illegal_character(&mut self) {
        let location = self.current_location();
        if let Some(character) = self.advance() {
            let diagnostic = LexDiagnostic {
                character,
                location,
            };
            tracing::warn!("{}", diagnostic);
            self.diagnostics.push(diagnostic);
        }
    }

    // ===== Scanning helpers =====

    /// Consume characters up to `end` and return them
    fn take_until(&mut self, end: usize) -> String {
        let mut text = String::new();
        while self.position < end {
            match self.advance() {
                Some(ch) => text.push(ch),
                None => break,
            }
        }
        text
    }

    /// Index of the first occurrence of `pattern` at or after `from`
    fn find_from(&self, from: usize, pattern: &[char]) -> Option<usize> {
        (from..self.input.len())
            .find(|&i| self.input[i..].starts_with(pattern))
    }

    fn run_end(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut pos = from;
        while self.char_at(pos).is_some_and(&pred) {
            pos += 1;
        }
        pos
    }

    fn word_end(&self, from: usize) -> usize {
        self.run_end(from, |c| c.is_ascii_alphanumeric() || c == '_')
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.input.get(pos).copied()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.char_at(self.position)
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.char_at(self.position + n)
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// `u`, `l`, `ll`/`LL` and their unsigned combinations, as allowed by C99
fn is_int_suffix(s: &str) -> bool {
    let is_u = |c: char| c == 'u' || c == 'U';
    let u_count = s.chars().filter(|&c| is_u(c)).count();
    let length_part = s.trim_start_matches(is_u).trim_end_matches(is_u);
    !s.is_empty()
        && u_count <= 1
        && length_part.chars().count() + u_count == s.chars().count()
        && matches!(length_part, "" | "l" | "L" | "ll" | "LL")
}

/// If `word` is `base` optionally followed by one floating suffix, return
/// that suffix (possibly empty).
pub fn special_suffix<'w>(word: &'w str, base: &str) -> Option<&'w str> {
    let word = word.trim_start_matches(['+', '-']);
    let suffix = word.strip_prefix(base)?;
    matches!(suffix, "" | "f" | "F" | "l" | "L").then_some(suffix)
}
