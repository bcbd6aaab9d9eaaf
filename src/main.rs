//! Hummingbird's main application entry point.
//! Parses the command line and dispatches to the scaffolder, the route
//! generator or the dev orchestrator.

use std::path::PathBuf;

use hummingbird::{
    cli::{get_args, AddTarget, Args, Commands},
    dev::{default_commands, run_dev},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{scaffold, ScaffoldContext},
    renderer::PlaceholderRenderer,
    route::add_route,
    store::TemplateStore,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let engine = PlaceholderRenderer::new();

    match args.command {
        Commands::Init {
            project_name,
            force,
            author,
        } => {
            let context = ScaffoldContext::new(project_name.as_str()).with_author(author);
            let written = scaffold(
                &engine,
                TemplateStore::embedded(),
                PathBuf::from(&project_name),
                &context,
                force,
            )?;
            for path in &written {
                println!("Created: '{}'", path.display());
            }
            println!("Project '{project_name}' initialized.");
        }
        Commands::Add {
            target: AddTarget::Route { name, project_root },
        } => {
            let route_path = add_route(&engine, &name, &project_root)?;
            println!("Created route: {}", route_path.display());
        }
        Commands::Dev { project_dir } => {
            println!("Starting dev environment in {}...", project_dir.display());
            run_dev(&project_dir, &default_commands())?;
        }
    }

    Ok(())
}
