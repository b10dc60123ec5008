use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod cli;
mod config;
mod error;
mod git;
mod installer;
mod logging;
mod profile;
mod prompt;
mod script;
mod shell;
mod storage;
mod switcher;
mod validation;

use cli::{Cli, Commands};
use config::Paths;
use error::AppError;
use git::GitCli;
use installer::Installer;
use prompt::InquirePrompt;
use shell::ShellKind;
use storage::ProfileStore;
use switcher::{show_current_user, switch_user};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let paths = Paths::resolve(cli.home.as_deref(), cli.store.as_deref())?;
    let store = ProfileStore::new(&paths.store_file);
    let git = GitCli::default();

    match cli.command {
        Some(Commands::Install { shell, dry_run }) => {
            let shell = ShellKind::from_shell_path(&shell);
            Installer::new(paths, shell).dry_run(dry_run).install()?;
            Ok(())
        }
        Some(Commands::Switch { key }) => {
            switch_user(&store, &git, &mut InquirePrompt, &key)?;
            Ok(())
        }
        Some(Commands::List { json }) => list_all_users(&store, json),
        Some(Commands::Current) | None => {
            show_current_user(&git)?;
            Ok(())
        }
    }
}

/// Lists all profiles in the store
fn list_all_users(store: &ProfileStore, json: bool) -> Result<(), AppError> {
    let profiles = store.load_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("{}", "no users to show".red());
        return Ok(());
    }

    for profile in profiles {
        println!(
            "{} {} <{}>",
            format!("{}:", profile.key).blue(),
            profile.identity.name,
            profile.identity.email
        );
    }
    Ok(())
}
