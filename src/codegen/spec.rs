//! Specification namespace
//!
//! One target triple is described by three YAML documents (language, test
//! library, arithmetic library). [`Specification`] merges them into a single
//! flat map whose keys carry the prefixes `lang_`, `test_` and `arith_`.

use super::errors::GenerateError;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid specification document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A scalar value of a specification document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Flag(bool),
    Number(i64),
    Text(String),
    /// A key written without a value
    Empty,
}

impl SpecValue {
    fn kind(&self) -> &'static str {
        match self {
            SpecValue::Flag(_) => "a boolean",
            SpecValue::Number(_) => "a number",
            SpecValue::Text(_) => "text",
            SpecValue::Empty => "no value",
        }
    }

    /// Text form used inside templates
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            SpecValue::Text(text) => Cow::Borrowed(text),
            SpecValue::Number(n) => Cow::Owned(n.to_string()),
            SpecValue::Flag(b) => Cow::Owned(b.to_string()),
            SpecValue::Empty => Cow::Borrowed(""),
        }
    }
}

/// The key/value pairs of one YAML document, unprefixed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SpecDocument(pub FxHashMap<String, SpecValue>);

impl SpecDocument {
    pub fn from_yaml(source: &str) -> Result<Self, SpecError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }
}

/// Read-only namespace for one (language, test library, arithmetic library)
#[derive(Debug, Clone, Default)]
pub struct Specification {
    values: FxHashMap<String, SpecValue>,
}

impl Specification {
    pub fn new(lang: SpecDocument, test: SpecDocument, arith: SpecDocument) -> Self {
        let mut values = FxHashMap::default();
        for (prefix, document) in [("lang_", lang), ("test_", test), ("arith_", arith)] {
            for (key, value) in document.0 {
                values.insert(format!("{}{}", prefix, key), value);
            }
        }
        Self { values }
    }

    /// Build from the three YAML sources directly
    pub fn from_yaml(lang: &str, test: &str, arith: &str) -> Result<Self, SpecError> {
        Ok(Self::new(
            SpecDocument::from_yaml(lang)?,
            SpecDocument::from_yaml(test)?,
            SpecDocument::from_yaml(arith)?,
        ))
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.values.get(key)
    }

    /// The key as stored, borrowed from the namespace
    pub fn stored_key(&self, key: &str) -> Option<&str> {
        self.values.get_key_value(key).map(|(k, _)| k.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Template text stored under `key`. Numbers and booleans are rendered.
    pub fn text(&self, key: &str) -> Result<Cow<'_, str>, GenerateError> {
        Ok(self.require(key)?.render())
    }

    pub fn flag(&self, key: &str) -> Result<bool, GenerateError> {
        match self.require(key)? {
            SpecValue::Flag(b) => Ok(*b),
            other => Err(self.invalid(key, "a boolean", other)),
        }
    }

    pub fn number(&self, key: &str) -> Result<i64, GenerateError> {
        match self.require(key)? {
            SpecValue::Number(n) => Ok(*n),
            other => Err(self.invalid(key, "a number", other)),
        }
    }

    /// All keys starting with `prefix`, in no particular order
    pub fn keys_with_prefix<'a, 'p>(&'a self, prefix: &'p str) -> impl Iterator<Item = &'a str> + 'p
    where
        'a: 'p,
    {
        self.values
            .keys()
            .map(String::as_str)
            .filter(move |key| key.starts_with(prefix))
    }

    fn require(&self, key: &str) -> Result<&SpecValue, GenerateError> {
        self.values.get(key).ok_or_else(|| GenerateError::MissingKey {
            key: key.to_string(),
        })
    }

    fn invalid(&self, key: &str, expected: &'static str, found: &SpecValue) -> GenerateError {
        GenerateError::InvalidValue {
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }
}
