//! # HealthCalc CLI
//!
//! Terminal front end for health_core.
//!
//! ```text
//! health-cli bmi --weight 70 --height 1.75
//! health-cli classify --bmi 18.5
//! health-cli ibw --height 175 --gender m
//! health-cli lorenz --height 165 --gender f --json
//! ```

mod cli;
mod logger;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match cli::execute(&cli) {
        Ok(outcome) => {
            if cli.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", outcome);
            }
        }
        Err(e) => {
            tracing::debug!(code = e.error_code(), "command failed");
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            } else {
                eprintln!("Error: {}", e.message());
            }
            std::process::exit(1);
        }
    }
}
