use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomotodo::cli::args::{Cli, Commands};
use pomotodo::cli::commands;
use pomotodo::config::{Paths, Settings};
use pomotodo::{logging, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let paths = Paths::new()?;

    let output = match cli.command.unwrap_or(Commands::Tui { mode: None }) {
        Commands::Tui { mode } => {
            paths.ensure_dirs()?;
            logging::init_file(&paths.log_file)?;
            let settings = Settings::load_from_path(&paths.settings_file)
                .context("Could not load settings")?;
            let options = tui::Options {
                cue: cli.cue,
                mode,
                name: cli.name,
            };
            tui::run(settings, paths.settings_file, options)?;
            String::new()
        }
        Commands::Settings(args) => {
            logging::init_stderr();
            commands::settings(&paths, args.command, format)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
