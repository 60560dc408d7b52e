//! Generation error types
//!
//! [`GenerateError`] covers everything that aborts the generation of one file
//! for one target. Unresolved operations are not errors: they are collected as
//! warnings on the [`Generator`](super::generator::Generator) and only drop
//! the affected test.

use crate::parser::ast::SourceLocation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A fixed key required by the walk is absent from the specification
    #[error("specification key '{key}' is missing")]
    MissingKey { key: String },

    /// A key exists but holds the wrong kind of value
    #[error("specification key '{key}' holds {found}, expected {expected}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Tightest and accurate outputs of one test have different types
    #[error(
        "outputs of '{op_name}' in line {} differ in type: tightest {tightest}, accurate {accurate}",
        .location.line
    )]
    OutputTypeMismatch {
        op_name: String,
        tightest: String,
        accurate: String,
        location: SourceLocation,
    },

    /// The operation template yields fewer result groups than declared outputs
    #[error(
        "operation '{signature}' in line {} yields {groups} result group(s) for {outputs} output(s)",
        .location.line
    )]
    ResultArity {
        signature: String,
        outputs: usize,
        groups: usize,
        location: SourceLocation,
    },
}
