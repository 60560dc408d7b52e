//! Plugin discovery
//!
//! Targets live in a plugin tree:
//!
//! ```text
//! plugins/
//!   <lang>/lang.yaml
//!   <lang>/callbacks.yaml                 (optional)
//!   <lang>/test/<testlib>/test.yaml
//!   <lang>/arith/<arithlib>/arith.yaml
//! ```
//!
//! Every `(lang, testlib, arithlib)` combination found in the tree is a
//! [`Configuration`]. A [`ConfigSelector`] picks a subset of them.

use crate::codegen::callbacks::{CallbackError, Callbacks, IdentityCallbacks, RewriteCallbacks};
use crate::codegen::spec::{SpecDocument, SpecError, Specification};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: PathBuf },

    #[error("{path}: {source}")]
    Spec { path: PathBuf, source: SpecError },

    #[error("{path}: {source}")]
    Callbacks {
        path: PathBuf,
        source: CallbackError,
    },

    #[error("invalid configuration selector '{0}'")]
    InvalidSelector(String),

    #[error("invalid file regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

/// One generation target
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration {
    pub language: String,
    pub test_library: String,
    pub arith_library: String,
}

impl Configuration {
    pub fn new(language: &str, test_library: &str, arith_library: &str) -> Self {
        Self {
            language: language.to_string(),
            test_library: test_library.to_string(),
            arith_library: arith_library.to_string(),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "('{}', '{}', '{}')",
            self.language, self.test_library, self.arith_library
        )
    }
}

/// A `(lang, test, arith)` pattern; `None` stands for `*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorTuple {
    pub language: Option<String>,
    pub test_library: Option<String>,
    pub arith_library: Option<String>,
}

/// Which configurations to generate
///
/// Written as `*` for everything, or as `;`-separated tuples such as
/// `('cpp','*','*');('octave','*','intlab')`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSelector {
    All,
    Tuples(Vec<SelectorTuple>),
}

static TUPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(\s*'([^']*)'\s*,\s*'([^']*)'\s*,\s*'([^']*)'\s*\)\s*$")
        .expect("tuple pattern is valid")
});

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").expect("identifier pattern is valid"));

impl FromStr for ConfigSelector {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Ok(ConfigSelector::All);
        }

        let invalid = || DiscoveryError::InvalidSelector(s.to_string());
        let mut tuples = Vec::new();
        for part in trimmed.split(';') {
            let caps = TUPLE.captures(part).ok_or_else(invalid)?;
            let mut fields = Vec::with_capacity(3);
            for i in 1..=3 {
                let field = &caps[i];
                if field == "*" {
                    fields.push(None);
                } else if IDENT.is_match(field) {
                    fields.push(Some(field.to_string()));
                } else {
                    return Err(invalid());
                }
            }
            let mut fields = fields.into_iter();
            tuples.push(SelectorTuple {
                language: fields.next().flatten(),
                test_library: fields.next().flatten(),
                arith_library: fields.next().flatten(),
            });
        }
        Ok(ConfigSelector::Tuples(tuples))
    }
}

/// A plugin directory on disk
#[derive(Debug, Clone)]
pub struct PluginTree {
    root: PathBuf,
}

impl PluginTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn languages(&self) -> Result<Vec<String>, DiscoveryError> {
        sub_directories(&self.root)
    }

    pub fn test_libraries(&self, language: &str) -> Result<Vec<String>, DiscoveryError> {
        sub_directories(&self.root.join(language).join("test"))
    }

    pub fn arith_libraries(&self, language: &str) -> Result<Vec<String>, DiscoveryError> {
        sub_directories(&self.root.join(language).join("arith"))
    }

    /// Expand a selector against the tree. Concrete names are taken as given
    /// and only checked when their documents are loaded.
    pub fn configurations(
        &self,
        selector: &ConfigSelector,
    ) -> Result<Vec<Configuration>, DiscoveryError> {
        let all = SelectorTuple {
            language: None,
            test_library: None,
            arith_library: None,
        };
        let tuples = match selector {
            ConfigSelector::All => std::slice::from_ref(&all),
            ConfigSelector::Tuples(tuples) => tuples.as_slice(),
        };

        let mut configurations: Vec<Configuration> = Vec::new();
        for tuple in tuples {
            let languages = match &tuple.language {
                Some(language) => vec![language.clone()],
                None => self.languages()?,
            };
            for language in &languages {
                let tests = match &tuple.test_library {
                    Some(test) => vec![test.clone()],
                    None => self.test_libraries(language)?,
                };
                let ariths = match &tuple.arith_library {
                    Some(arith) => vec![arith.clone()],
                    None => self.arith_libraries(language)?,
                };
                for test in &tests {
                    for arith in &ariths {
                        let configuration = Configuration::new(language, test, arith);
                        if !configurations.contains(&configuration) {
                            configurations.push(configuration);
                        }
                    }
                }
            }
        }
        Ok(configurations)
    }

    /// Load and merge the three documents of a configuration
    pub fn load_specification(
        &self,
        configuration: &Configuration,
    ) -> Result<Specification, DiscoveryError> {
        let language_dir = self.root.join(&configuration.language);
        let lang = load_document(&language_dir.join("lang.yaml"), "language specification")?;
        let test = load_document(
            &language_dir
                .join("test")
                .join(&configuration.test_library)
                .join("test.yaml"),
            "test library specification",
        )?;
        let arith = load_document(
            &language_dir
                .join("arith")
                .join(&configuration.arith_library)
                .join("arith.yaml"),
            "arithmetic library specification",
        )?;
        Ok(Specification::new(lang, test, arith))
    }

    /// Rewrite hooks of a language, or the identity if it has none
    pub fn load_callbacks(&self, language: &str) -> Result<Box<dyn Callbacks>, DiscoveryError> {
        let path = self.root.join(language).join("callbacks.yaml");
        if !path.is_file() {
            return Ok(Box::new(IdentityCallbacks));
        }
        let source = read(&path)?;
        let callbacks = RewriteCallbacks::from_yaml(&source)
            .map_err(|source| DiscoveryError::Callbacks { path, source })?;
        Ok(Box::new(callbacks))
    }
}

/// `*.itl` files in `dir` whose name matches `pattern` from its start, sorted
pub fn source_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|source| {
        DiscoveryError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    if !dir.is_dir() {
        return Err(DiscoveryError::NotFound {
            what: "source directory",
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| DiscoveryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| DiscoveryError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file() && name.ends_with(".itl") && regex.is_match(name) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ===== Helpers =====

fn sub_directories(path: &Path) -> Result<Vec<String>, DiscoveryError> {
    if !path.is_dir() {
        return Err(DiscoveryError::NotFound {
            what: "directory",
            path: path.to_path_buf(),
        });
    }
    let entries = fs::read_dir(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with('.') && !name.starts_with("__") {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

fn load_document(path: &Path, what: &'static str) -> Result<SpecDocument, DiscoveryError> {
    if !path.is_file() {
        return Err(DiscoveryError::NotFound {
            what,
            path: path.to_path_buf(),
        });
    }
    let source = read(path)?;
    SpecDocument::from_yaml(&source).map_err(|source| DiscoveryError::Spec {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, DiscoveryError> {
    fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
