mod chat;
mod client;
mod config;
mod constants;
mod errors;
mod print_help;
mod repl;
mod utils;

use crate::client::OpenAiClient;
use crate::config::{load_env_file, parse_args, ClientConfig, Settings};
use crate::errors::CliError;
use crate::print_help::print_help;
use colored::Colorize;
use log::info;
use std::{env, io, process};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let settings = match parse_args(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            eprintln!("Run with -h for usage.");
            process::exit(2);
        }
    };

    if settings.show_help {
        print_help();
        return;
    }

    if let Err(err) = load_env_file(settings.env_file.as_deref()) {
        eprintln!("{} {}", "error:".bold().red(), err);
        process::exit(1);
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(&settings).await {
        eprintln!("{} {}", "error:".bold().red(), err);
        process::exit(1);
    }
}

async fn run(settings: &Settings) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    info!("using model {} at {}", settings.model, config.endpoint);
    let client = OpenAiClient::new(config)?;

    println!("Welcome to GPT chat ({}).", settings.model.cyan());
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&client, settings, stdin.lock(), stdout.lock()).await
}
