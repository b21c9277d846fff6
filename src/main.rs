mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;
use privcat_core::{LoadOptions, ReferencePolicy};
use std::process;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = logging::init_logging(cli.verbose, !cli.no_color) {
        eprintln!("Warning: {}", err);
    }

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = LoadOptions {
        reference_policy: if cli.strict_references {
            ReferencePolicy::Strict
        } else {
            ReferencePolicy::Lenient
        },
    };

    match &cli.command {
        Command::Validate { file } => {
            tracing::info!(file = %file.display(), "validating catalog");
            commands::run_validate(file, &options)
        }
        Command::Filter {
            file,
            filters,
            json,
        } => commands::run_filter(file, &options, filters, *json),
        Command::Show { file, slug } => commands::run_show(file, &options, slug),
        Command::Example { file, id } => commands::run_example(file, &options, id),
        Command::Tags { file, filters } => commands::run_tags(file, &options, filters),
    }
}
