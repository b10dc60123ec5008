use std::process::{Command, Output};

use tracing::debug;

use crate::{error::AppError, profile::Identity};

/// Git config key holding the user's name
pub const USER_NAME_KEY: &str = "user.name";
/// Git config key holding the user's email
pub const USER_EMAIL_KEY: &str = "user.email";

/// Access to the active Git identity
pub trait GitIdentity {
    /// Reads the effective `user.name` and `user.email`; unset values are empty
    fn get_identity(&self) -> Result<Identity, AppError>;

    /// Writes `user.name` and `user.email` to the global Git config
    fn set_identity(&self, identity: &Identity) -> Result<(), AppError>;
}

/// [`GitIdentity`] backed by the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl GitCli {
    fn run(&self, args: &[&str]) -> Result<Output, AppError> {
        debug!(program = %self.program, ?args, "running git");
        Ok(Command::new(&self.program).args(args).output()?)
    }

    /// Executes Git config get command
    ///
    /// # Arguments
    /// * `key` - Git config key (user.name or user.email)
    fn get_config(&self, key: &str) -> Result<String, AppError> {
        let git_command_output: Output = self.run(&["config", "--get", key])?;

        if !git_command_output.status.success() {
            let stderr = String::from_utf8(git_command_output.stderr)?.trim().to_string();
            // `git config --get` exits 1 with no output when the key is unset
            if stderr.is_empty() {
                return Ok(String::new());
            }
            return Err(AppError::GitCommand(stderr));
        }

        let value = String::from_utf8_lossy(&git_command_output.stdout).trim().to_string();
        Ok(value)
    }

    /// Executes a global Git config set command
    ///
    /// # Arguments
    /// * `key` - Git config key to set (user.name or user.email)
    /// * `value` - Value to set for key (username or email)
    fn set_global_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        let git_command_output: Output = self.run(&["config", "--global", key, value])?;

        if !git_command_output.status.success() {
            return Err(AppError::GitCommand(
                String::from_utf8(git_command_output.stderr)?.trim().to_string(),
            ));
        }

        Ok(())
    }
}

impl GitIdentity for GitCli {
    fn get_identity(&self) -> Result<Identity, AppError> {
        Ok(Identity::new(
            self.get_config(USER_NAME_KEY)?,
            self.get_config(USER_EMAIL_KEY)?,
        ))
    }

    fn set_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.set_global_config(USER_NAME_KEY, &identity.name)?;
        self.set_global_config(USER_EMAIL_KEY, &identity.email)
    }
}
