use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Publish Wizard - validate venue drafts before publishing
#[derive(Parser)]
#[command(name = "publish-wizard")]
#[command(about = "Validate venue drafts against the publish wizard rules")]
#[command(version)]
pub struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every field of a draft
    Validate {
        /// Path to the draft JSON file
        draft: PathBuf,
    },
    /// Check one wizard step of a draft
    Step {
        /// Step number (1-10)
        step: u8,
        /// Path to the draft JSON file
        draft: PathBuf,
    },
    /// Show how many input steps of a draft are complete
    Progress {
        /// Path to the draft JSON file
        draft: PathBuf,
    },
    /// Print the publish request body for a valid draft
    Request {
        /// Path to the draft JSON file
        draft: PathBuf,
        /// Id of the user publishing the venue
        #[arg(short, long)]
        user_id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_requires_command() {
        let result = Cli::try_parse_from(["publish-wizard"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["publish-wizard", "validate", "/tmp/draft.json"]).unwrap();
        assert!(!cli.json);
        match cli.command {
            Commands::Validate { draft } => {
                assert_eq!(draft.to_str().unwrap(), "/tmp/draft.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_step_command() {
        let cli = Cli::try_parse_from(["publish-wizard", "step", "4", "draft.json"]).unwrap();
        match cli.command {
            Commands::Step { step, draft } => {
                assert_eq!(step, 4);
                assert_eq!(draft.to_str().unwrap(), "draft.json");
            }
            _ => panic!("Expected Step command"),
        }
    }

    #[test]
    fn test_cli_step_rejects_non_numeric() {
        let result = Cli::try_parse_from(["publish-wizard", "step", "four", "draft.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_json_flag() {
        let cli =
            Cli::try_parse_from(["publish-wizard", "progress", "draft.json", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Progress { .. }));
    }

    #[test]
    fn test_cli_request_requires_user_id() {
        let result = Cli::try_parse_from(["publish-wizard", "request", "draft.json"]);
        assert!(result.is_err());

        let cli =
            Cli::try_parse_from(["publish-wizard", "request", "draft.json", "-u", "12"]).unwrap();
        match cli.command {
            Commands::Request { user_id, .. } => assert_eq!(user_id, 12),
            _ => panic!("Expected Request command"),
        }
    }
}
