//! Command-line interface implementation for mycli.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for mycli.
#[derive(Parser, Debug)]
#[command(
    name = "mycli",
    author,
    version,
    about = "MyCLI: manage reusable code templates",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mycli project
    Init {
        /// Project name (defaults to current directory name)
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Force initialization even if project already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Add a template to your project
    Add {
        /// Template name to add
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Custom name for the generated code
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Skip running Prettier on the target folder
        #[arg(long)]
        no_format: bool,
    },

    /// List all available templates
    List,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no command was given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
