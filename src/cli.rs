use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::EditConfig;

#[derive(Parser, Debug)]
#[command(name = "minised")]
#[command(about = "Minimal implementation of sed")]
#[command(long_about = "Minimalistic in-place stream editor for environments without a full sed.

The target file is read whole, every substitute command is applied in order,
then every append command, and the result is written back over the file.
Nothing is written if any step fails.

EDIT COMMANDS:
  s/old/new/        Replace every occurrence of the literal 'old' with 'new'.
                    Any character may replace '/', e.g. s#/usr#/opt#
  /prefix/atext     After every line starting with 'prefix', insert 'text'

  Patterns are literal strings, not regular expressions.
  Commands matching neither form are ignored.

EXAMPLES:
  minised -i app.conf -e 's/8080/9090/'
  minised -i hosts -e '/127.0.0.1/a::1 localhost'
  minised -i notes.txt -e 's|a|b|' -e '/b/a--' --dry-run")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Input file to edit in place
    #[arg(short = 'i', long = "in-place", value_name = "FILE", required = true)]
    pub file: PathBuf,

    /// Append a sed style editing command (repeatable, applied in order)
    #[arg(short = 'e', long = "expression", value_name = "EDIT", action = ArgAction::Append)]
    pub edits: Vec<String>,

    /// Preview changes as a diff without modifying the file
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of ~/.minised/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Split off the immutable per-run edit target
    pub fn edit_config(&self) -> EditConfig {
        EditConfig::new(self.file.clone(), self.edits.clone())
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_file_and_edits_in_order() {
        let cli = Cli::try_parse_from([
            "minised", "-i", "a.txt", "-e", "s/a/b/", "-e", "/x/ay", "--expression", "s|c|d|",
        ])
        .unwrap();

        let config = cli.edit_config();
        assert_eq!(config.path(), Path::new("a.txt"));
        assert_eq!(config.commands(), ["s/a/b/", "/x/ay", "s|c|d|"].map(String::from));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let err = Cli::try_parse_from(["minised", "-e", "s/a/b/"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_no_edits_is_allowed() {
        let cli = Cli::try_parse_from(["minised", "-i", "a.txt"]).unwrap();
        assert!(cli.edits.is_empty());
    }

    #[test]
    fn test_edit_starting_with_dash_value() {
        let cli = Cli::try_parse_from(["minised", "-i", "a.txt", "-e", "/-/a--"]).unwrap();
        assert_eq!(cli.edits, vec!["/-/a--".to_string()]);
    }

    #[test]
    fn test_verbosity_and_dry_run() {
        let cli = Cli::try_parse_from(["minised", "-i", "a.txt", "-vv", "-d"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.dry_run);
    }
}
