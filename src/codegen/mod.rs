//! Template-driven code generation
//!
//! This module turns a parsed [`Document`](crate::parser::ast::Document) into
//! test source code for one target triple:
//! - [`spec`]: the merged `lang_`/`test_`/`arith_` specification namespace
//! - [`resolver`]: operation lookup with `*` wildcard fallback
//! - [`template`]: `$NAME` placeholder substitution
//! - [`callbacks`]: per-language literal rewriting hooks
//! - [`generator`]: the AST walk and assertion generation
//! - [`errors`]: generation error types
//!
//! # Generation Model
//!
//! The AST is never modified. Each call to [`generate`] owns its warning list,
//! so one document may be rendered for any number of targets, in any order or
//! concurrently, with identical results.

pub mod callbacks;
pub mod errors;
pub mod generator;
pub mod resolver;
pub mod spec;
pub mod template;

pub use callbacks::{Callbacks, IdentityCallbacks, RewriteCallbacks};
pub use errors::GenerateError;
pub use generator::{generate, GeneratedFile, Generator};
pub use spec::{SpecDocument, SpecError, SpecValue, Specification};
