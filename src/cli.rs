use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "iplocate", version)]
#[command(
  about = "Look up where an IP address lives and open it on a map.",
  long_about = "An interactive command-line utility that asks for an IP address (or uses your own), shows its ipinfo.io geolocation and network details, and offers to open the exact coordinates in Google Maps."
)]
pub struct Cli {
  /// Print debug logs (request URLs, open attempts) to stderr.
  #[arg(short, long)]
  pub verbose: bool,

  /// Skip the startup animation and banner.
  #[arg(long)]
  pub no_intro: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_args(args: &[&str]) -> Vec<String> {
    std::iter::once("iplocate".to_string())
      .chain(args.iter().map(std::string::ToString::to_string))
      .collect()
  }

  #[test]
  fn test_no_arguments() {
    let cli = Cli::try_parse_from(make_args(&[])).expect("Should parse");
    assert!(!cli.verbose);
    assert!(!cli.no_intro);
  }

  #[test]
  fn test_flags() {
    let cli = Cli::try_parse_from(make_args(&["-v", "--no-intro"]))
      .expect("Should parse flags");
    assert!(cli.verbose);
    assert!(cli.no_intro);
  }

  #[test]
  fn test_positional_target_is_rejected() {
    let result = Cli::try_parse_from(make_args(&["8.8.8.8"]));
    assert!(
      result.is_err(),
      "The IP is read interactively, not from arguments"
    );
    assert!(matches!(
      result.unwrap_err().kind(),
      clap::error::ErrorKind::UnknownArgument
    ));
  }
}
