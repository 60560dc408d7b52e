//! # Introduction
//!
//! itfgen reads interval test library (ITL) files, which describe interval
//! operations together with their expected results, and writes executable
//! test code for any combination of target language, test framework and
//! interval arithmetic library. Everything target-specific comes from YAML
//! specification documents in a plugin tree.
//!
//! ## Generation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST ─┬→ Generator (target 1) → test source
//!                                ├→ Generator (target 2) → test source
//!                                └→ ...
//! ```
//!
//! 1. [`parser`]: tokenises an ITL file and builds an immutable AST, inferring
//!    literal types along the way.
//! 2. [`codegen`]: walks the AST once per target, resolving operation
//!    templates by signature (with `*` wildcards) and generating assertions
//!    for tightest and accurate results.
//! 3. [`discovery`]: finds targets in the plugin tree and loads their
//!    specification documents.
//! 4. [`runner`]: the file × target loop behind the command-line tool.
//!
//! ## Example
//!
//! ```
//! use itfgen::codegen::{generate, IdentityCallbacks, Specification};
//! use itfgen::parser::parse_document;
//!
//! let doc = parse_document("testcase t { neg [1.0,2.0] = [-2.0,-1.0]; }", "t.itl").unwrap();
//! let spec = Specification::from_yaml(
//!     "name: toy\nline_comment_token: '#'\nline_end_token: ''\nindent_tests: false\nindent_testcases: false",
//!     "testfile_seq: $TESTCASES\ntestcase_seq: $TESTS\ntest_seq: $ASSERTS\nassert_equals: $ARG1 == $ARG2",
//!     "inf_sup_interval_double: '[$ARG1, $ARG2]'\n'op_neg<<*>>*': -$ARG1",
//! )
//! .unwrap();
//!
//! let out = generate(&doc, &spec, &IdentityCallbacks).unwrap();
//! assert_eq!(out.content, "-[1.0, 2.0] == [-2.0, -1.0]");
//! ```

pub mod codegen;
pub mod discovery;
pub mod parser;
pub mod runner;
