use clap::{Parser, Subcommand};
use repostat::commands::*;
use repostat::core::print_error;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repostat")]
#[command(about = "Column-aligned git status across many repositories")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one aligned status line per repository
    Status {
        /// Stream git's own colorized status report per repository
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
        /// Repository paths to check instead of the configured set
        paths: Vec<PathBuf>,
    },
    /// List the configured repositories and their tags
    List,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Status { verbose, paths } => {
            if let Err(e) = execute_status(paths, verbose) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::List => {
            if let Err(e) = execute_list() {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }
}
