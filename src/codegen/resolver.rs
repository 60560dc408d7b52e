//! Operation resolver
//!
//! Operation templates are keyed by signature, e.g.
//! `arith_op_add<<interval<double>>><interval<double>,interval<double>>`.
//! A key may contain `*`, which matches any run of characters. Lookup tries the
//! exact key first, then the wildcard keys sharing the operation prefix from
//! the longest to the shortest (ties in alphabetical order). A wildcard key
//! matches when it matches a prefix of the requested signature.

use super::spec::Specification;

/// How a signature was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'s> {
    Exact(&'s str),
    Wildcard(&'s str),
}

impl<'s> Resolution<'s> {
    pub fn key(&self) -> &'s str {
        match self {
            Resolution::Exact(key) | Resolution::Wildcard(key) => key,
        }
    }
}

pub struct OperationResolver<'s> {
    spec: &'s Specification,
}

impl<'s> OperationResolver<'s> {
    pub fn new(spec: &'s Specification) -> Self {
        Self { spec }
    }

    /// Find the template key for `signature` among the keys starting with `prefix`
    pub fn resolve(&self, prefix: &str, signature: &str) -> Option<Resolution<'s>> {
        if let Some(key) = self.spec.stored_key(signature) {
            return Some(Resolution::Exact(key));
        }

        let mut candidates: Vec<&'s str> = self.spec.keys_with_prefix(prefix).collect();
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        candidates
            .into_iter()
            .find(|key| wildcard_matches(key, signature))
            .map(Resolution::Wildcard)
    }
}

/// `*` matches any run of characters, everything else is literal. The match
/// is anchored at the start of `signature` only.
pub fn wildcard_matches(pattern: &str, signature: &str) -> bool {
    let mut segments = pattern.split('*');
    let first = segments.next().unwrap_or_default();
    let Some(mut rest) = signature.strip_prefix(first) else {
        return false;
    };
    for segment in segments {
        match rest.find(segment) {
            Some(at) => rest = &rest[at + segment.len()..],
            None => return false,
        }
    }
    true
}
