use colored::Colorize;
use tracing::info;

use crate::{
    error::AppError,
    git::GitIdentity,
    profile::{Identity, Profile},
    prompt::Prompt,
    storage::ProfileStore,
    validation::{validate_input_email, validate_input_username, validate_key},
};

/// Result of a successful switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Key was already stored
    Switched(Profile),
    /// Key was missing, added from prompted input, then applied
    Added(Profile),
}

/// Shows current git user
pub fn show_current_user(git: &impl GitIdentity) -> Result<Identity, AppError> {
    let identity = git.get_identity()?;
    println!("{}", "current git user:".blue());
    println!("{} {}", "name:".blue(), identity.name);
    println!("{} {}", "email:".blue(), identity.email);
    Ok(identity)
}

/// Switches the global Git identity to the profile stored under `key`
///
/// A missing key prompts for a name and email, appends the new profile and
/// then switches to it.
pub fn switch_user(
    store: &ProfileStore,
    git: &impl GitIdentity,
    prompt: &mut impl Prompt,
    key: &str,
) -> Result<SwitchOutcome, AppError> {
    validate_key(key)?;

    match store.find(key)? {
        Some(profile) => {
            apply_profile(git, &profile)?;
            Ok(SwitchOutcome::Switched(profile))
        }
        None => {
            add_user(store, prompt, key)?;
            let profile = store
                .find(key)?
                .ok_or_else(|| AppError::InvalidProfile(key.to_string()))?;
            apply_profile(git, &profile)?;
            Ok(SwitchOutcome::Added(profile))
        }
    }
}

/// Prompts for a new profile under `key` and appends it to the store
fn add_user(
    store: &ProfileStore,
    prompt: &mut impl Prompt,
    key: &str,
) -> Result<Profile, AppError> {
    println!("{} '{}' {}", "key".yellow(), key, "not found".yellow());

    let name = prompt
        .prompt(&format!("enter the name to use for '{}':", key))?
        .trim()
        .to_string();
    let email = prompt
        .prompt(&format!("enter the email to use for '{}':", key))?
        .trim()
        .to_string();

    validate_input_username(&name)?;
    validate_input_email(&email)?;

    let profile = Profile::new(key, Identity::new(name, email));
    store.append(&profile)?;
    info!(key, "added profile");
    println!("{} {}", "new git user profile added for key:".green(), key);
    Ok(profile)
}

fn apply_profile(git: &impl GitIdentity, profile: &Profile) -> Result<(), AppError> {
    git.set_identity(&profile.identity)?;
    info!(key = %profile.key, "switched git identity");
    println!(
        "{} {} <{}>",
        "switched to git user:".green(),
        profile.identity.name,
        profile.identity.email
    );
    Ok(())
}
