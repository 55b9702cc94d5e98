//! Command-line interface implementation for plugin-init and plugin-gen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

const DEMO_FLAG: &str = "--demo";

/// Command-line arguments of `plugin-init`.
#[derive(Parser, Debug)]
#[command(
    name = "plugin-init",
    author,
    version,
    about = "Create a new plugin from the repository's template directory",
    long_about = None
)]
pub struct Args {
    /// Name of the plugin (e.g. HardClipper, Chorus)
    #[arg(value_name = "PLUGIN_NAME")]
    pub plugin_name: String,

    /// Create the plugin in demos/ instead of plugins/
    #[arg(long)]
    pub demo: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Repository root containing plugins/_Template (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Unrecognized trailing arguments, accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Args {
    /// Whether the demo category was requested anywhere on the command line.
    pub fn is_demo(&self) -> bool {
        self.demo || self.extra.iter().any(|arg| arg == DEMO_FLAG)
    }
}

/// Command-line arguments of `plugin-gen`.
#[derive(Parser, Debug)]
#[command(
    name = "plugin-gen",
    author,
    version,
    about = "Create a new plugin from the built-in templates",
    long_about = None
)]
pub struct GenArgs {
    /// Name of the plugin (e.g. HardClipper, Chorus)
    #[arg(value_name = "PLUGIN_NAME")]
    pub plugin_name: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Repository root receiving plugins/<PLUGIN_NAME> (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Parses command line arguments for any of the binaries.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = T::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

pub fn get_args() -> Args {
    parse_args()
}

pub fn get_gen_args() -> GenArgs {
    parse_args()
}
