//! Literal rewriting hooks
//!
//! A target language may need to rewrite some literals before they are placed
//! into templates (string quoting, numeric suffixes, testcase names). The
//! [`Callbacks`] trait exposes four hooks, each defaulting to the identity.
//!
//! [`RewriteCallbacks`] implements the hooks from a `callbacks.yaml` document
//! found next to a language's `lang.yaml`:
//!
//! ```yaml
//! string:
//!   - pattern: '^"(.*)"$'
//!     replace: "'$1'"
//! qualident:
//!   - pattern: '\.'
//!     replace: '_'
//! ```
//!
//! Rules of one hook are applied in order, each to the result of the previous
//! one, and replace every match.

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

pub trait Callbacks: Send + Sync {
    /// String literal, quotes included
    fn string(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Integer constant as written, suffix included
    fn int(&self, text: &str) -> String {
        text.to_string()
    }

    /// Floating constant as written, suffix included
    fn fp_num(&self, text: &str) -> String {
        text.to_string()
    }

    /// Dotted testcase name
    fn qualident(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Leaves every literal unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCallbacks;

impl Callbacks for IdentityCallbacks {}

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("invalid callbacks document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid pattern '{pattern}' for hook '{hook}': {source}")]
    Pattern {
        hook: &'static str,
        pattern: String,
        source: regex::Error,
    },
}

#[derive(Debug, Deserialize)]
struct RuleDef {
    pattern: String,
    replace: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RewriteDocument {
    string: Vec<RuleDef>,
    int: Vec<RuleDef>,
    fp_num: Vec<RuleDef>,
    qualident: Vec<RuleDef>,
}

#[derive(Debug, Clone)]
struct RewriteRule {
    pattern: Regex,
    replace: String,
}

/// Regex rewrite rules per hook
#[derive(Debug, Clone, Default)]
pub struct RewriteCallbacks {
    string: Vec<RewriteRule>,
    int: Vec<RewriteRule>,
    fp_num: Vec<RewriteRule>,
    qualident: Vec<RewriteRule>,
}

impl RewriteCallbacks {
    pub fn from_yaml(source: &str) -> Result<Self, CallbackError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let document: RewriteDocument = serde_yaml::from_str(source)?;
        Ok(Self {
            string: compile("string", document.string)?,
            int: compile("int", document.int)?,
            fp_num: compile("fp_num", document.fp_num)?,
            qualident: compile("qualident", document.qualident)?,
        })
    }

    pub fn rule_count(&self) -> usize {
        self.string.len() + self.int.len() + self.fp_num.len() + self.qualident.len()
    }
}

fn compile(hook: &'static str, defs: Vec<RuleDef>) -> Result<Vec<RewriteRule>, CallbackError> {
    defs.into_iter()
        .map(|def| {
            let pattern = Regex::new(&def.pattern).map_err(|source| CallbackError::Pattern {
                hook,
                pattern: def.pattern.clone(),
                source,
            })?;
            Ok(RewriteRule {
                pattern,
                replace: def.replace,
            })
        })
        .collect()
}

fn apply(rules: &[RewriteRule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replace.as_str())
            .into_owned()
    })
}

impl Callbacks for RewriteCallbacks {
    fn string(&self, raw: &str) -> String {
        apply(&self.string, raw)
    }

    fn int(&self, text: &str) -> String {
        apply(&self.int, text)
    }

    fn fp_num(&self, text: &str) -> String {
        apply(&self.fp_num, text)
    }

    fn qualident(&self, name: &str) -> String {
        apply(&self.qualident, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_defaults() {
        let cbs = IdentityCallbacks;
        assert_eq!(cbs.string("\"x\""), "\"x\"");
        assert_eq!(cbs.int("5ul"), "5ul");
        assert_eq!(cbs.fp_num("1.0F"), "1.0F");
        assert_eq!(cbs.qualident("a.b"), "a.b");
    }

    #[test]
    fn test_rewrite_rules_apply_in_order() {
        let cbs = RewriteCallbacks::from_yaml(
            r#"
string:
  - pattern: '^"(.*)"$'
    replace: "'$1'"
fp_num:
  - pattern: '[lL]$'
    replace: ''
  - pattern: '^(.*)$'
    replace: 'real($1)'
qualident:
  - pattern: '\.'
    replace: '_'
"#,
        )
        .unwrap();

        assert_eq!(cbs.rule_count(), 4);
        assert_eq!(cbs.string("\"abc\""), "'abc'");
        assert_eq!(cbs.fp_num("2.5L"), "real(2.5)");
        assert_eq!(cbs.int("7"), "7");
        assert_eq!(cbs.qualident("minimal.add.test"), "minimal_add_test");
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            RewriteCallbacks::from_yaml("int:\n  - pattern: '('\n    replace: x\n"),
            Err(CallbackError::Pattern { hook: "int", .. })
        ));
        assert!(matches!(
            RewriteCallbacks::from_yaml("float:\n  - pattern: a\n    replace: b\n"),
            Err(CallbackError::Yaml(_))
        ));
        assert_eq!(RewriteCallbacks::from_yaml("").unwrap().rule_count(), 0);
    }
}
