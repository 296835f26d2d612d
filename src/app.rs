use crate::console_io::Console;
use crate::intro::Intro;
use crate::maps;
use crate::opener::{Opener, Shell};
use crate::providers::{ipinfo, Lookup};
use crate::render;
use console::style;
use std::io::{BufRead, Write};

const IP_PROMPT: &str = "Enter IP address (leave empty to use your own): ";
const OPEN_PROMPT: &str = "Open exact location in browser/app now? (Y/n): ";

/// How a run that got past the lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Opened,
  OpenFailed,
  Declined,
  NoCoordinates,
}

/// Empty, "y" and "yes" all mean "go ahead".
fn consents(answer: &str) -> bool {
  matches!(answer.to_lowercase().as_str(), "" | "y" | "yes")
}

pub struct App<I, L, S, R, W> {
  intro: I,
  lookup: L,
  opener: Opener<S>,
  console: Console<R, W>,
  zoom: u8,
}

impl<I, L, S, R, W> App<I, L, S, R, W>
where
  I: Intro,
  L: Lookup,
  S: Shell,
  R: BufRead,
  W: Write,
{
  pub const fn new(
    intro: I,
    lookup: L,
    opener: Opener<S>,
    console: Console<R, W>,
    zoom: u8,
  ) -> Self {
    Self {
      intro,
      lookup,
      opener,
      console,
      zoom,
    }
  }

  /// Runs one interactive session.
  ///
  /// # Errors
  ///
  /// Only the lookup can fail the run; nothing is printed for the record or
  /// map in that case.
  pub async fn run(&mut self) -> Result<Outcome, ipinfo::Error> {
    self.intro.play().await;
    self.intro.banner();

    let answer = self.console.ask(&style(IP_PROMPT).cyan().to_string());
    let ip = Some(answer.as_str()).filter(|ip| !ip.is_empty());

    self.console.say(style("Fetching geolocation info...").dim());
    let record = self.lookup.lookup(ip).await?;
    self.console.say(render::info_box(&record));

    let outcome = self.offer_map(&record).await;
    self.console.say(
      style("\n[✔] Process complete. Press Ctrl+C to exit if needed.\n").dim(),
    );
    Ok(outcome)
  }

  async fn offer_map(&mut self, record: &ipinfo::Record) -> Outcome {
    let Some(link) = maps::exact_link(record.loc.as_deref(), self.zoom) else {
      self.console.say(style("No coordinate data available for this IP, cannot build exact map link.").red());
      return Outcome::NoCoordinates;
    };

    self.console.say(format!(
      "{} {}",
      style("🌍 Exact location (Google Maps):").green(),
      style(&link).underlined().bold()
    ));

    let answer = self.console.ask(&style(OPEN_PROMPT).yellow().to_string());
    if !consents(&answer) {
      self.console.say(style("Okay, not opening the map. You can copy the link above anytime.").dim());
      return Outcome::Declined;
    }

    if self.opener.open(&link).await {
      self.console.say(
        style("Opened the exact location in your default browser/app.")
          .green(),
      );
      Outcome::Opened
    } else {
      self.console.say(style("Couldn't automatically open the link. Copy the URL above and paste it in your browser.").red());
      Outcome::OpenFailed
    }
  }
}
