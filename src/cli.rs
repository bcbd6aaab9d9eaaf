//! Command-line interface implementation for hummingbird.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for hummingbird.
#[derive(Parser, Debug)]
#[command(author, version, about = "Hummingbird: scaffolding for templ + vite web apps", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from the bundled templates
    Init {
        /// Name of the project; also the directory it is created in
        #[arg(value_name = "PROJECT_NAME")]
        project_name: String,

        /// Write into an existing project directory, overwriting files
        #[arg(short, long)]
        force: bool,

        /// Author name substituted into templates
        #[arg(short, long, default_value = "")]
        author: String,
    },

    /// Add a file to an existing project
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },

    /// Run templ, air and the frontend dev server together
    Dev {
        /// Project directory the tools run in
        #[arg(value_name = "PROJECT_DIR")]
        project_dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddTarget {
    /// Generate a page under app/pages, e.g. `blog/[slug]`
    Route {
        /// Slash-separated route path; brackets mark dynamic segments
        #[arg(value_name = "NAME")]
        name: String,

        /// Project root containing app/pages
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help or version
/// * With status code 1 on any usage error
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}
