//! Startup animation and banner. Purely cosmetic: nothing here can fail the run.

use console::{measure_text_width, style, Color, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const STEPS: [&str; 4] = [
  "Initializing system modules...",
  "Establishing secure connection...",
  "Loading stealth assets...",
  "System ready.",
];

const STEP_DELAY: Duration = Duration::from_millis(650);
const SETTLE_DELAY: Duration = Duration::from_millis(450);
const TICK: Duration = Duration::from_millis(80);

/// Braille "dots" frames; the last entry is shown once a step finishes.
const DOTS: [&str; 11] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"];

const ART: [&str; 5] = [
  r" ___ ____    ___ _   _ _____ ___  ",
  r"|_ _|  _ \  |_ _| \ | |  ___/ _ \ ",
  r" | || |_) |  | ||  \| | |_ | | | |",
  r" | ||  __/   | || |\  |  _|| |_| |",
  r"|___|_|     |___|_| \_|_|   \___/ ",
];

/// xterm-256 greens, bright to deep, one per art row.
const GRADIENT: [u8; 5] = [47, 42, 41, 36, 35];

const FALLBACK: &str = "IP SCANNER";
const TAGLINE: &str = "   ── stealth mode engaged · cli ip lookup ──";

/// Cosmetic stages of a run, swappable so tests skip the delays.
#[allow(async_fn_in_trait)]
pub trait Intro {
  /// Timed step-by-step animation.
  async fn play(&self);
  /// Static banner printed before the prompt.
  fn banner(&self);
}

/// Draws to the real terminal.
pub struct Terminal {
  term: Term,
}

impl Terminal {
  #[must_use]
  pub fn stdout() -> Self {
    Self {
      term: Term::stdout(),
    }
  }

  fn clear(&self) {
    if let Err(e) = self.term.clear_screen() {
      log::debug!("could not clear the screen: {e}");
    }
  }

  fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    match ProgressStyle::with_template("{spinner:.green} {msg}") {
      Ok(template) => pb.set_style(template.tick_strings(&DOTS)),
      Err(e) => log::debug!("spinner template rejected: {e}"),
    }
    pb.set_message(style(message).green().to_string());
    pb.enable_steady_tick(TICK);
    pb
  }
}

impl Intro for Terminal {
  async fn play(&self) {
    self.clear();
    for step in STEPS {
      let pb = Self::spinner(step);
      tokio::time::sleep(STEP_DELAY).await;
      pb.finish_with_message(style(step).green().bright().to_string());
    }
    tokio::time::sleep(SETTLE_DELAY).await;
    self.clear();
  }

  fn banner(&self) {
    let width = self.term.size_checked().map(|(_, cols)| usize::from(cols));
    let text = format!("{}\n{}\n", banner_text(width), style(TAGLINE).dim());
    if let Err(e) = self.term.write_line(&text) {
      log::debug!("could not draw the banner: {e}");
    }
  }
}

/// No output and no delays.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Intro for Silent {
  async fn play(&self) {}

  fn banner(&self) {}
}

/// Block-letter banner in a green gradient, or the plain fallback when the
/// terminal width is unknown or too narrow for the art.
fn banner_text(width: Option<usize>) -> String {
  let art_width = ART.iter().map(|l| measure_text_width(l)).max();
  match (width, art_width) {
    (Some(cols), Some(needed)) if cols >= needed => ART
      .iter()
      .zip(GRADIENT)
      .map(|(line, shade)| style(line).fg(Color::Color256(shade)).to_string())
      .collect::<Vec<_>>()
      .join("\n"),
    _ => style(FALLBACK).green().bold().to_string(),
  }
}
