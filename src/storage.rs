use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::AppError,
    profile::{KEY_DELIMITER, Profile},
};

/// Append-only line store of profiles, `~/.git-users` by default
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the store empty if missing. Returns `true` if it was created.
    pub fn ensure_exists(&self) -> Result<bool, AppError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, "")?;
        debug!(path = %self.path.display(), "created profile store");
        Ok(true)
    }

    fn read(&self) -> Result<String, AppError> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Finds the first line starting with `key:` and parses it
    ///
    /// Returns `Ok(None)` when no line matches and
    /// [`AppError::InvalidProfile`] when the matching line is malformed.
    pub fn find(&self, key: &str) -> Result<Option<Profile>, AppError> {
        let prefix = format!("{}{}", key, KEY_DELIMITER);
        let contents = self.read()?;

        let Some(line) = contents.lines().find(|line| line.starts_with(&prefix)) else {
            return Ok(None);
        };

        match Profile::parse_line(line) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!(key, %err, "malformed profile line");
                Err(AppError::InvalidProfile(key.to_string()))
            }
        }
    }

    /// Loads every parseable profile in file order, skipping malformed lines
    pub fn load_all(&self) -> Result<Vec<Profile>, AppError> {
        let contents = self.read()?;
        let mut profiles = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Profile::parse_line(line) {
                Ok(profile) => profiles.push(profile),
                Err(err) => warn!(line = index + 1, %err, "skipping malformed profile line"),
            }
        }

        Ok(profiles)
    }

    /// Appends a profile as a new line, creating the store if missing
    pub fn append(&self, profile: &Profile) -> Result<(), AppError> {
        let needs_newline = {
            let contents = self.read()?;
            !contents.is_empty() && !contents.ends_with('\n')
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_newline {
            writeln!(file)?;
        }
        writeln!(file, "{}", profile.to_line())?;

        debug!(key = %profile.key, path = %self.path.display(), "appended profile");
        Ok(())
    }
}
