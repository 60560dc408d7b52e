// itfgen: retargetable test generator for interval arithmetic libraries

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use itfgen::discovery::ConfigSelector;
use itfgen::runner::{self, RunOptions};

const EXAMPLES: &str = "\
Examples:
  -- generate tests for all source files in ./itl and all configurations
  itfgen -s itl

  -- like above, but use only test files whose name starts with 'libieee'
  itfgen -s itl -f 'libieee.*'

  -- generate tests for C++ only
  itfgen -c \"('cpp','*','*')\"

  -- generate tests for C++ with the BOOST test library and libieeep1788
  itfgen -c \"('cpp','BOOST','libieeep1788')\"

  -- generate tests for C++ and Octave
  itfgen -c \"('cpp','*','*');('octave','*','*')\"";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate interval arithmetic test suites from ITL files",
    long_about = "Reads ITL test descriptions and writes executable tests for every selected\n\
    (language, test library, arithmetic library) configuration of the plugin tree.",
    after_help = EXAMPLES
)]
struct Cli {
    /// Directory with ITL test files
    #[arg(short, long, value_name = "DIR", default_value = "itl")]
    source_directory: PathBuf,

    /// Regex the ITL file names must match
    #[arg(short, long, value_name = "REGEX", default_value = ".*")]
    file_regex: String,

    /// Configurations to generate, `*` or ('<lang>','<test>','<arith>') tuples separated by `;`
    #[arg(short, long, value_name = "SELECTOR", default_value = "*")]
    configurations: ConfigSelector,

    /// Output directory for generated files
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    output_directory: PathBuf,

    /// Plugin directory with language, test and arithmetic specifications
    #[arg(short, long, value_name = "DIR", default_value = "plugins")]
    plugin_directory: PathBuf,

    /// Report progress, warnings and timing
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    let options = RunOptions {
        source_dir: cli.source_directory,
        file_regex: cli.file_regex,
        selector: cli.configurations,
        output_dir: cli.output_directory,
        plugin_dir: cli.plugin_directory,
    };

    let summary = runner::run(&options)?;

    if summary.skipped_files > 0 || summary.failed > 0 {
        eprintln!(
            "{} of {} file(s) did not parse, {} generation(s) failed",
            summary.skipped_files, summary.files, summary.failed
        );
        std::process::exit(1);
    }

    Ok(())
}
