use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented prompt and message sink for the interactive run.
pub struct Console<R, W> {
  input: R,
  output: W,
}

impl Console<StdinLock<'static>, Stdout> {
  #[must_use]
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> Console<R, W> {
  pub const fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Prints `question` and returns the trimmed answer.
  ///
  /// End of input and read errors both count as an empty answer.
  pub fn ask(&mut self, question: &str) -> String {
    if let Err(e) = write!(self.output, "{question}")
      .and_then(|()| self.output.flush())
    {
      log::debug!("could not write prompt: {e}");
    }

    let mut line = String::new();
    match self.input.read_line(&mut line) {
      Ok(0) => log::debug!("stdin closed, treating answer as empty"),
      Ok(_) => {}
      Err(e) => {
        log::debug!("could not read answer: {e}");
        line.clear();
      }
    }
    line.trim().to_string()
  }

  /// Prints one line of output.
  pub fn say(&mut self, text: impl std::fmt::Display) {
    if let Err(e) = writeln!(self.output, "{text}") {
      log::debug!("could not write to stdout: {e}");
    }
  }

  #[must_use]
  pub fn into_output(self) -> W {
    self.output
  }
}
