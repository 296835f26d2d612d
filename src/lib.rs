#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::{Context, Result};

mod app;
pub mod cli;
mod console_io;
pub mod intro;
pub mod logging;
pub mod maps;
pub mod opener;
pub mod providers;
mod render;
mod user_config;

pub use app::{App, Outcome};
pub use console_io::Console;

use intro::{Intro, Silent, Terminal};
use opener::{Opener, Platform, SystemShell};
use providers::ipinfo;

/// Runs one interactive lookup session.
///
/// Loads the user config, builds the ipinfo client, then plays the intro
/// (unless disabled), asks for an IP, prints its record and offers to open
/// the exact location on a map.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the lookup fails.
pub async fn run(cli: &cli::Cli) -> Result<Outcome> {
  let config = user_config::load();
  let http = reqwest::Client::builder()
    .user_agent(format!("iplocate/{}", env!("CARGO_PKG_VERSION")))
    .build()
    .context("Failed to build HTTP client")?;

  let lookup = ipinfo::Client::new(http, config.token);
  let opener = Opener::new(Platform::detect(), SystemShell);
  let console = Console::stdio();

  if cli.no_intro || !config.intro {
    session(Silent, lookup, opener, console, config.zoom).await
  } else {
    session(Terminal::stdout(), lookup, opener, console, config.zoom).await
  }
}

async fn session<I: Intro, R: std::io::BufRead, W: std::io::Write>(
  intro: I,
  lookup: ipinfo::Client,
  opener: Opener<SystemShell>,
  console: Console<R, W>,
  zoom: u8,
) -> Result<Outcome> {
  App::new(intro, lookup, opener, console, zoom)
    .run()
    .await
    .context("Geolocation lookup failed")
}
