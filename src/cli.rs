use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(version, about = "Switch between Git identity profiles")]
pub struct Cli {
    /// Subcommand chosen to execute, shows current Git user when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Home directory to install into and read profiles from
    #[arg(long, env = "GIT_USER_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Profile store file, defaults to ~/.git-users
    #[arg(long, env = "GIT_USER_STORE", global = true)]
    pub store: Option<PathBuf>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Installs the git-user script and puts it on PATH
    Install {
        /// Shell whose startup file receives the PATH export
        #[arg(long, env = "SHELL", default_value = "bash")]
        shell: String,
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Switches current Git user to the profile stored under a key
    Switch {
        /// Profile key, prompts for name and email when not stored yet
        key: String,
    },
    /// Displays current Git user
    Current,
    /// Displays all stored profiles
    List {
        /// Print profiles as JSON
        #[arg(long)]
        json: bool,
    },
}
