//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Interactive explorer for US bikeshare trip data.
///
/// Prompts for a city, month and day of week, then prints statistics about
/// the matching trips and optionally the raw rows.
#[derive(Debug, Parser)]
#[command(name = "bikeshare", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["bikeshare"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_flags() {
        let cli =
            Cli::try_parse_from(["bikeshare", "-v", "--config", "/tmp/bikeshare.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bikeshare.toml")));
    }
}
