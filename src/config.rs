use std::path::{Path, PathBuf};

use crate::{error::AppError, script::SCRIPT_NAME};

/// Profile store file in user's home directory
const GLOBAL_GIT_USERS_FILE: &str = ".git-users";
/// Directory under home that receives the switcher script
const SCRIPT_DIR_NAME: &str = "bin";

/// Filesystem locations used by the installer and switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub home: PathBuf,
    pub script_dir: PathBuf,
    pub script_file: PathBuf,
    pub store_file: PathBuf,
}

impl Paths {
    /// Derives every location from a home directory
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home: PathBuf = home.into();
        let script_dir = home.join(SCRIPT_DIR_NAME);
        Self {
            script_file: script_dir.join(SCRIPT_NAME),
            store_file: home.join(GLOBAL_GIT_USERS_FILE),
            script_dir,
            home,
        }
    }

    /// Resolves paths from optional overrides, falling back to the user's home
    ///
    /// # Arguments
    /// * `home` - Home directory override (`--home` / `GIT_USER_HOME`)
    /// * `store` - Profile store override (`GIT_USER_STORE`)
    pub fn resolve(home: Option<&Path>, store: Option<&Path>) -> Result<Self, AppError> {
        let home: PathBuf = match home {
            Some(home) => home.to_path_buf(),
            None => dirs::home_dir().ok_or(AppError::HomeDirNotFound)?,
        };

        let mut paths = Self::from_home(home);
        if let Some(store) = store {
            paths.store_file = store.to_path_buf();
        }
        Ok(paths)
    }
}
