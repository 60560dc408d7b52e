//! Batch driver: every selected ITL file for every selected configuration
//!
//! Each source file is parsed once and rendered once per configuration. The
//! result is written to `<out>/<lang>/<testlib>/<arithlib>/<stem><lang_extension>`.
//! A file that fails to parse is skipped; a generation error skips only that
//! (file, configuration) pair.

use crate::codegen::{generate, Callbacks, GenerateError, Specification};
use crate::discovery::{self, ConfigSelector, Configuration, DiscoveryError, PluginTree};
use crate::parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("specification {configuration}: {source}")]
    Specification {
        configuration: Configuration,
        source: GenerateError,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source_dir: PathBuf,
    pub file_regex: String,
    pub selector: ConfigSelector,
    pub output_dir: PathBuf,
    pub plugin_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("itl"),
            file_regex: ".*".to_string(),
            selector: ConfigSelector::All,
            output_dir: PathBuf::from("output"),
            plugin_dir: PathBuf::from("plugins"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Source files considered
    pub files: usize,
    /// Source files skipped because they did not parse
    pub skipped_files: usize,
    /// (file, configuration) pairs that failed to generate
    pub failed: usize,
    /// Paths written, in generation order
    pub generated: Vec<PathBuf>,
    pub warnings: usize,
    pub elapsed: Duration,
}

/// A loaded configuration
struct Target {
    configuration: Configuration,
    spec: Specification,
    callbacks: Box<dyn Callbacks>,
    extension: String,
}

pub fn run(options: &RunOptions) -> Result<RunSummary, RunError> {
    let start = Instant::now();
    let tree = PluginTree::new(&options.plugin_dir);

    let files = discovery::source_files(&options.source_dir, &options.file_regex)?;
    let targets = load_targets(&tree, &options.selector)?;
    tracing::info!(
        files = files.len(),
        configurations = targets.len(),
        "starting generation"
    );

    let mut summary = RunSummary {
        files: files.len(),
        ..RunSummary::default()
    };

    for path in &files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = fs::read_to_string(path).map_err(|source| RunError::Read {
            path: path.clone(),
            source,
        })?;

        let document = match parser::parse_document(&source, &file_name) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("{}", e);
                summary.skipped_files += 1;
                continue;
            }
        };

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        for target in &targets {
            let out_path = output_path(&options.output_dir, &target.configuration)
                .join(format!("{}{}", stem, target.extension));
            tracing::info!(
                "Generating {} for specification {}",
                out_path.display(),
                target.configuration
            );

            let generated = match generate(&document, &target.spec, target.callbacks.as_ref()) {
                Ok(generated) => generated,
                Err(e) => {
                    tracing::error!(
                        file = %file_name,
                        configuration = %target.configuration,
                        "{}",
                        e
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            write_output(&out_path, &generated.content)?;
            for warning in &generated.warnings {
                tracing::warn!("{}", warning);
            }
            summary.warnings += generated.warnings.len();
            summary.generated.push(out_path);
        }
    }

    summary.elapsed = start.elapsed();
    tracing::info!(
        "Generated output for {} testfiles in {:.2} seconds.",
        summary.files,
        summary.elapsed.as_secs_f64()
    );
    Ok(summary)
}

/// `<out>/<lang>/<testlib>/<arithlib>`
pub fn output_path(output_dir: &Path, configuration: &Configuration) -> PathBuf {
    output_dir
        .join(&configuration.language)
        .join(&configuration.test_library)
        .join(&configuration.arith_library)
}

fn load_targets(tree: &PluginTree, selector: &ConfigSelector) -> Result<Vec<Target>, RunError> {
    let mut targets = Vec::new();
    for configuration in tree.configurations(selector)? {
        let spec = tree.load_specification(&configuration)?;
        let callbacks = tree.load_callbacks(&configuration.language)?;
        let extension = match spec.text("lang_extension") {
            Ok(extension) => extension.into_owned(),
            Err(source) => {
                return Err(RunError::Specification {
                    configuration,
                    source,
                })
            }
        };
        targets.push(Target {
            configuration,
            spec,
            callbacks,
            extension,
        });
    }
    Ok(targets)
}

fn write_output(path: &Path, content: &str) -> Result<(), RunError> {
    let write_error = |source| RunError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}
