use clap::{ArgAction, Parser, Subcommand};
use roster::model::EmailPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Interactive student roster backed by a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use (overrides $ROSTER_FILE and the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Treatment of emails without '@': reject or warn
    #[arg(long, global = true, value_name = "POLICY")]
    pub email_policy: Option<EmailPolicy>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration
    Config {
        /// Configuration key (data-file, email-policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_menu() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
        assert!(cli.email_policy.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_global_flags() {
        let cli = Cli::try_parse_from([
            "roster",
            "-vv",
            "--file",
            "class.csv",
            "--email-policy",
            "warn",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("class.csv")));
        assert_eq!(cli.email_policy, Some(EmailPolicy::Warn));
    }

    #[test]
    fn rejects_unknown_email_policy() {
        assert!(Cli::try_parse_from(["roster", "--email-policy", "maybe"]).is_err());
    }

    #[test]
    fn parses_config_subcommand() {
        let cli = Cli::try_parse_from(["roster", "config", "email-policy", "warn"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("email-policy"));
                assert_eq!(value.as_deref(), Some("warn"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
