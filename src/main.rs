//! mycli's entry point: parses arguments, sets up logging and routes to
//! the command handlers.

use mycli::{
    catalog::BuiltinCatalog,
    cli::{get_args, Args, Commands},
    commands::{add, init, list},
    console,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Runs the requested command against the current directory.
fn run(args: Args) -> Result<()> {
    let project_root = std::env::current_dir()?;

    match args.command {
        Commands::Init { name, force } => {
            console::banner(env!("CARGO_PKG_VERSION"));
            init::run(&project_root, init::InitOptions { name, force })?;
        }
        Commands::Add {
            template,
            name,
            force,
            no_format,
        } => {
            let catalog = BuiltinCatalog::new(&project_root);
            let prompt = DialoguerPrompter::new();
            add::run(
                &project_root,
                add::AddOptions {
                    template,
                    name,
                    force,
                    format: !no_format,
                },
                &catalog,
                &prompt,
            )?;
        }
        Commands::List => {
            list::run(&project_root)?;
        }
    }

    Ok(())
}
