#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use clap::Parser;
use console::style;
use iplocate::{cli::Cli, logging, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();

  logging::builder(env_logger::Env::default(), cli.verbose).init();

  match run(&cli).await {
    Ok(outcome) => {
      log::debug!("session finished: {outcome:?}");
      ExitCode::SUCCESS
    }
    Err(e) => {
      log::debug!("{e:?}");
      eprintln!("{} {e:#}", style("Error:").red().bold());
      ExitCode::FAILURE
    }
  }
}
