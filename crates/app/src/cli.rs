//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tukija command line.
#[derive(Debug, Parser)]
#[command(
    name = "tukija",
    version,
    about = "Authorize Tukija against YouTube and inspect channel memberships"
)]
pub struct Cli {
    /// Command to run; defaults to `auth`
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Client secret document downloaded from the Google API console
    #[arg(long, global = true)]
    pub client_secret: Option<PathBuf>,

    /// Settings file, `tukija.toml` by default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Open the authorization link in the default browser
    #[arg(long, global = true)]
    pub open_browser: bool,
}

/// Commands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Obtain (or reuse) a token and verify the client can be built
    #[default]
    Auth,

    /// Print the authenticated user's channel id
    Channel,

    /// List the membership levels of the authenticated channel
    Levels,

    /// List channel members
    Members {
        /// Only members with access to this level
        #[arg(long)]
        level: Option<String>,

        /// Save the list as CSV to this file instead of printing it
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Delete the cached token
    Signout,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_auth_is_default() {
        let cli = Cli::try_parse_from(["tukija"]).expect("parse");
        assert_eq!(cli.command.unwrap_or_default(), Command::Auth);
    }

    #[test]
    fn test_members_with_level() {
        let cli = Cli::try_parse_from([
            "tukija",
            "members",
            "--level",
            "level-1",
            "--output",
            "members.csv",
            "--client-secret",
            "/tmp/secret.json",
        ])
        .expect("parse");

        assert_eq!(
            cli.command,
            Some(Command::Members {
                level: Some("level-1".to_string()),
                output: Some(PathBuf::from("members.csv")),
            })
        );
        assert_eq!(cli.client_secret, Some(PathBuf::from("/tmp/secret.json")));
    }
}
