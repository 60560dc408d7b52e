//! Literal parsing
//!
//! Types are inferred from the token text: trailing `u`/`l` characters of an
//! integer, the suffix of a floating constant, and the suffix glued to `inf`,
//! `nai`, `empty` and `entire`. Floating suffixes are case sensitive: `F` and
//! `L` give float and long double, a lower case `f` or `l` is lexed but leaves
//! the value a double.
//!
//! ```text
//! literal  := interval | integer | float | infinity | string | 'true' | 'false' | overlap
//! interval := '[' ( nai | empty | entire decor? | bound ',' bound ']' decor? )
//! bound    := float | infinity | unsuffixed integer
//! decor    := '_' decoration
//! ```

use super::parser::{ParseError, Parser};
use crate::parser::ast::*;
use crate::parser::lexer::{special_suffix, Token};

impl Parser {
    /// True when the current token can start a literal
    pub(crate) fn starts_literal(&self) -> bool {
        matches!(
            self.peek(),
            Token::LBracket(_)
                | Token::IntLiteral(..)
                | Token::FloatLiteral(..)
                | Token::Inf(..)
                | Token::StringLiteral(..)
                | Token::True(_)
                | Token::False(_)
                | Token::Overlap(..)
        )
    }

    /// One or more literals
    pub(crate) fn parse_literal_sequence(&mut self) -> Result<Vec<Literal>, ParseError> {
        let mut literals = vec![self.parse_literal()?];
        while self.starts_literal() {
            literals.push(self.parse_literal()?);
        }
        Ok(literals)
    }

    pub(crate) fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let literal = match self.peek_token() {
            Token::LBracket(_) => return self.parse_interval().map(Literal::Interval),
            Token::IntLiteral(text, _) => {
                let (ty, unsigned) = IntType::from_suffix(int_suffix(&text));
                Literal::Integer { text, ty, unsigned }
            }
            Token::FloatLiteral(text, _) => Literal::Float(float_literal(text)),
            Token::Inf(text, _) => {
                let (sign, ty) = infinity(&text);
                Literal::Infinity { sign, ty }
            }
            Token::StringLiteral(text, _) => Literal::String(text),
            Token::True(_) => Literal::Boolean(true),
            Token::False(_) => Literal::Boolean(false),
            Token::Overlap(relation, _) => Literal::Overlap(relation),
            _ => return Err(self.error(format!("Expected literal, found {}", self.peek()))),
        };
        self.advance();
        Ok(literal)
    }

    fn parse_interval(&mut self) -> Result<Interval, ParseError> {
        let location = self.current_location();
        self.expect_token(&Token::LBracket(location), "Expected '['")?;

        match self.peek_token() {
            Token::Nai(text, _) => {
                self.advance();
                self.close_interval()?;
                Ok(special(SpecialKind::NotAnInterval, &text))
            }
            Token::Empty(text, _) => {
                self.advance();
                self.close_interval()?;
                Ok(special(SpecialKind::Empty, &text))
            }
            Token::Entire(text, _) => {
                self.advance();
                self.close_interval()?;
                let interval = special(SpecialKind::Entire, &text);
                match self.parse_decoration()? {
                    Some(decoration) => match interval {
                        Interval::Special { kind, ty, .. } => Ok(Interval::Special {
                            kind,
                            ty,
                            decoration: Some(decoration),
                        }),
                        other => Ok(other),
                    },
                    None => Ok(interval),
                }
            }
            _ => {
                let inf = self.parse_bound()?;
                self.expect_token(
                    &Token::Comma(self.current_location()),
                    "Expected ',' between interval bounds",
                )?;
                let sup = self.parse_bound()?;
                self.close_interval()?;

                let interval = InfSupInterval::new(inf, sup, None)
                    .map_err(|e| self.error_at(location, e.to_string()))?;
                Ok(Interval::InfSup(match self.parse_decoration()? {
                    Some(decoration) => interval.with_decoration(decoration),
                    None => interval,
                }))
            }
        }
    }

    fn close_interval(&mut self) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RBracket(self.current_location()),
            "Expected ']' to close interval",
        )
    }

    fn parse_bound(&mut self) -> Result<Bound, ParseError> {
        let bound = match self.peek_token() {
            Token::FloatLiteral(text, _) => Bound::Number(float_literal(text)),
            Token::Inf(text, _) => {
                let (sign, ty) = infinity(&text);
                Bound::Infinity { sign, ty }
            }
            // `[1,2]` reads as a double interval
            Token::IntLiteral(text, _) if int_suffix(&text).is_empty() => {
                Bound::Number(FloatLiteral {
                    text,
                    ty: FloatType::Double,
                })
            }
            Token::IntLiteral(text, _) => {
                return Err(self.error(format!(
                    "Integer suffix not allowed in interval bound '{}'",
                    text
                )))
            }
            _ => {
                return Err(self.error(format!(
                    "Expected number or infinity as interval bound, found {}",
                    self.peek()
                )))
            }
        };
        self.advance();
        Ok(bound)
    }

    /// Optional `_decoration` after a closing bracket
    fn parse_decoration(&mut self) -> Result<Option<Decoration>, ParseError> {
        if !self.match_token(&Token::Underscore(self.current_location())) {
            return Ok(None);
        }
        match self.peek_token() {
            Token::Decoration(decoration, _) => {
                self.advance();
                Ok(Some(decoration))
            }
            _ => Err(self.error(format!("Expected decoration after '_', found {}", self.peek()))),
        }
    }
}

/// Trailing `u`/`l` characters of an integer constant
fn int_suffix(text: &str) -> &str {
    let body = text.trim_end_matches(['u', 'U', 'l', 'L']);
    &text[body.len()..]
}

fn float_literal(text: String) -> FloatLiteral {
    let suffix = match text.chars().last() {
        Some(c @ ('f' | 'F' | 'l' | 'L')) => c.to_string(),
        _ => String::new(),
    };
    FloatLiteral {
        ty: FloatType::from_suffix(&suffix),
        text,
    }
}

fn infinity(text: &str) -> (Sign, FloatType) {
    let sign = if text.starts_with('-') {
        Sign::Minus
    } else {
        Sign::Plus
    };
    let ty = FloatType::from_suffix(special_suffix(text, "inf").unwrap_or(""));
    (sign, ty)
}

fn special(kind: SpecialKind, text: &str) -> Interval {
    Interval::Special {
        kind,
        ty: FloatType::from_suffix(special_suffix(text, kind.key()).unwrap_or("")),
        decoration: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(source: &str) -> Vec<Literal> {
        let mut parser = Parser::new(source, "literals.itl");
        parser.parse_literal_sequence().unwrap()
    }

    fn first_error(source: &str) -> ParseError {
        let mut parser = Parser::new(source, "literals.itl");
        parser.parse_literal_sequence().unwrap_err()
    }

    #[test]
    fn test_interval_types() {
        let lits = literals("[1.0,2.0] [1.0F,2.0F] [-infL,+infL] [1,2]");
        assert_eq!(type_signature(&lits), "interval<double>,interval<float>,interval<long_double>,interval<double>");
    }

    #[test]
    fn test_mixed_bounds_are_rejected() {
        let err = first_error("[1.0F,2.0]");
        assert!(err.message.contains("float and double"), "{}", err);
        assert_eq!(err.location.column, 1);
    }

    #[test]
    fn test_suffixed_integer_bound_is_rejected() {
        let err = first_error("[1u,2]");
        assert!(err.message.contains("Integer suffix"), "{}", err);
    }

    #[test]
    fn test_special_intervals() {
        let lits = literals("[empty] [entireF]_dac [naiL] [1.0,2.0]_com");
        assert_eq!(
            lits[0],
            Literal::Interval(Interval::Special {
                kind: SpecialKind::Empty,
                ty: FloatType::Double,
                decoration: None
            })
        );
        assert_eq!(
            lits[1],
            Literal::Interval(Interval::Special {
                kind: SpecialKind::Entire,
                ty: FloatType::Float,
                decoration: Some(Decoration::Dac)
            })
        );
        assert_eq!(lits[2].literal_type().to_string(), "interval<long_double>");
        match &lits[3] {
            Literal::Interval(interval) => assert_eq!(interval.decoration(), Some(Decoration::Com)),
            other => panic!("Expected interval, got {:?}", other),
        }
    }

    #[test]
    fn test_decoration_on_empty_is_not_part_of_literal() {
        // `_` is left for the caller, which rejects it
        let mut parser = Parser::new("[empty]_trv", "literals.itl");
        assert!(parser.parse_literal().is_ok());
        assert!(matches!(parser.peek(), Token::Underscore(_)));
    }

    #[test]
    fn test_scalar_literals() {
        let lits = literals("3ul -7 2.5e-1L -infF \"a \\\" b\" true false meets");
        assert_eq!(
            lits[0],
            Literal::Integer {
                text: "3ul".to_string(),
                ty: IntType::Long,
                unsigned: true
            }
        );
        assert_eq!(lits[1].literal_type(), LiteralType::Integer(IntType::Int));
        assert_eq!(lits[2].literal_type(), LiteralType::Float(FloatType::LongDouble));
        assert_eq!(
            lits[3],
            Literal::Infinity {
                sign: Sign::Minus,
                ty: FloatType::Float
            }
        );
        assert_eq!(lits[4], Literal::String("\"a \\\" b\"".to_string()));
        assert_eq!(lits[5], Literal::Boolean(true));
        assert_eq!(lits[6], Literal::Boolean(false));
        assert_eq!(lits[7], Literal::Overlap(OverlapRelation::Meets));
    }

    #[test]
    fn test_missing_decoration_name() {
        let err = first_error("[1.0,2.0]_");
        assert!(err.message.contains("Expected decoration"), "{}", err);
    }

    #[test]
    fn test_hex_float_suffix() {
        let lits = literals("0x1.8p3F 0x1p-2");
        assert_eq!(lits[0].literal_type(), LiteralType::Float(FloatType::Float));
        assert_eq!(lits[1].literal_type(), LiteralType::Float(FloatType::Double));
    }

    #[test]
    fn test_lower_case_suffixes_are_double() {
        let lits = literals("1.5f 2.5l -inff [1.0f,2.0l] [emptyf] 1.0F");
        assert_eq!(
            type_signature(&lits),
            "double,double,double,interval<double>,interval<double>,float"
        );
        // the suffix is kept in the text
        assert!(matches!(&lits[0], Literal::Float(f) if f.text == "1.5f"));
    }
}
