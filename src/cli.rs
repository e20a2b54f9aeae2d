use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kcbridge",
    about = "Expose Keychain items to a connection manager as dynamic credentials.",
    version
)]
pub struct Cli {
    /// TOML file with tool, delimiter and keychain settings.
    #[arg(long, global = true, env = "KCBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON document.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe a delimited list of Keychain items as dynamic credentials.
    List {
        /// Item names separated by the configured delimiter (default ';').
        #[arg(allow_hyphen_values = true)]
        names: String,
    },

    /// Print the username and password of a single Keychain item.
    Get {
        /// The item name (label).
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// Ask for a username and password on the terminal and print them.
    Prompt {
        /// Username to use instead of asking for one.
        #[arg(long)]
        username: Option<String>,

        /// Text shown before the password prompt.
        #[arg(long)]
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["kcbridge", "list", "-Mail;Git"]).unwrap();
        match cli.command {
            Command::List { names } => assert_eq!(names, "-Mail;Git"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_get_accepts_leading_double_hyphen() {
        let cli = Cli::try_parse_from(["kcbridge", "get", "--pretty-item"]).unwrap();
        match cli.command {
            Command::Get { name } => assert_eq!(name, "--pretty-item"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.pretty);
    }

    #[test]
    fn test_empty_list_parses() {
        let cli = Cli::try_parse_from(["kcbridge", "list", ""]).unwrap();
        assert!(matches!(cli.command, Command::List { ref names } if names.is_empty()));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kcbridge", "get", "Mail", "--pretty", "-vv"]).unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.verbose, 2);
    }
}
