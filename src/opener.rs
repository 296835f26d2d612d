//! Best-effort "open this URL" across Termux, macOS, Windows and Linux.
//!
//! Candidate commands are tried in order through the system shell and the
//! first one that exits successfully wins. A failed attempt is only logged.

use std::env;
use std::process::Stdio;
use tokio::process::Command;

/// Where we are running, as far as opening URLs is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
  /// Running inside the Termux Android terminal.
  pub termux: bool,
  /// `std::env::consts::OS` value ("linux", "macos", "windows", ...).
  pub os: &'static str,
}

impl Platform {
  #[must_use]
  pub fn detect() -> Self {
    Self {
      termux: env::var_os("TERMUX_VERSION").is_some(),
      os: env::consts::OS,
    }
  }
}

struct Candidate {
  applies: fn(&Platform) -> bool,
  template: &'static str,
  quote: fn(&str) -> String,
}

/// Ordered (predicate, template) table; `{url}` is replaced by the URL as
/// quoted for the shell that will run the template.
const CANDIDATES: [Candidate; 4] = [
  Candidate {
    applies: |p| p.termux,
    template: "termux-open-url {url}",
    quote: shell_quote,
  },
  Candidate {
    applies: |p| p.os == "macos",
    template: "open {url}",
    quote: shell_quote,
  },
  Candidate {
    applies: |p| p.os == "windows",
    template: r#"cmd /c start "" {url}"#,
    quote: cmd_quote,
  },
  Candidate {
    applies: |_| true,
    template: "xdg-open {url}",
    quote: shell_quote,
  },
];

/// Wraps `s` in single quotes so the shell treats it as one literal word.
#[must_use]
pub fn shell_quote(s: &str) -> String {
  format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

/// Wraps a URL in double quotes for `cmd.exe`, which ignores single quotes
/// and would otherwise split the command at the `&` between query params.
/// A literal `"` is percent-encoded since it cannot be escaped inside quotes.
#[must_use]
pub fn cmd_quote(url: &str) -> String {
  format!("\"{}\"", url.replace('"', "%22"))
}

/// Shell commands worth trying on `platform`, in order.
#[must_use]
pub fn commands_for(platform: &Platform, url: &str) -> Vec<String> {
  CANDIDATES
    .iter()
    .filter(|c| (c.applies)(platform))
    .map(|c| c.template.replace("{url}", &(c.quote)(url)))
    .collect()
}

/// Runs a shell command line and reports whether it exited successfully.
#[allow(async_fn_in_trait)]
pub trait Shell {
  async fn run(&self, command: &str) -> bool;
}

/// The platform shell: `sh -c` everywhere except Windows' `cmd /C`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Shell for SystemShell {
  async fn run(&self, command: &str) -> bool {
    let mut cmd = if cfg!(windows) {
      let mut cmd = Command::new("cmd");
      cmd.arg("/C").arg(command);
      cmd
    } else {
      let mut cmd = Command::new("sh");
      cmd.arg("-c").arg(command);
      cmd
    };

    match cmd.stdin(Stdio::null()).output().await {
      Ok(output) if output.status.success() => true,
      Ok(output) => {
        log::debug!(
          "`{command}` exited with {}: {}",
          output.status,
          String::from_utf8_lossy(&output.stderr).trim()
        );
        false
      }
      Err(e) => {
        log::debug!("could not spawn `{command}`: {e}");
        false
      }
    }
  }
}

/// Tries each platform command until one succeeds.
pub struct Opener<S> {
  platform: Platform,
  shell: S,
}

impl<S: Shell> Opener<S> {
  pub const fn new(platform: Platform, shell: S) -> Self {
    Self { platform, shell }
  }

  /// Returns `true` as soon as one attempt succeeds, `false` when all fail.
  pub async fn open(&self, url: &str) -> bool {
    for command in commands_for(&self.platform, url) {
      log::debug!("trying `{command}`");
      if self.shell.run(&command).await {
        return true;
      }
    }
    false
  }
}
