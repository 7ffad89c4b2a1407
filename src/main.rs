use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_decomposer::cli::Cli;
use subnet_decomposer::commands::{resolve_settings, run};
use subnet_decomposer::config::Settings;
use subnet_decomposer::logging;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    if let Err(e) = logging::init(&cli.log_config, cli.verbose) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    match execute(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let settings = resolve_settings(cli, Settings::from_env()?);
    run(cli, &settings)
}
