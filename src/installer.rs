use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::Path,
};

use colored::Colorize;
use tracing::{debug, info};

use crate::{
    config::Paths, error::AppError, script, shell::ShellKind, storage::ProfileStore,
};

/// Comment written above the PATH export in the shell startup file
const PATH_COMMENT: &str = "# Add git-user script to PATH";

/// What an install step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Applied,
    AlreadyPresent,
    /// Dry run: the step would have been applied
    Pending,
}

/// Outcome of every install step, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub script_dir: Effect,
    pub script_file: Effect,
    pub path_export: Effect,
    pub store: Effect,
}

/// Sets up the `git-user` switcher for one user
#[derive(Debug, Clone)]
pub struct Installer {
    paths: Paths,
    shell: ShellKind,
    dry_run: bool,
}

impl Installer {
    pub fn new(paths: Paths, shell: ShellKind) -> Self {
        Self {
            paths,
            shell,
            dry_run: false,
        }
    }

    /// Reports what would change without touching the filesystem
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs every install step, stopping at the first error
    ///
    /// Steps already applied stay applied; re-running repairs the rest.
    pub fn install(&self) -> Result<InstallReport, AppError> {
        info!(
            shell = %self.shell,
            home = %self.paths.home.display(),
            dry_run = self.dry_run,
            "installing"
        );

        let script_dir = self.ensure_script_dir()?;
        print_status(script_dir, "created", "exists", &self.paths.script_dir);

        let script_file = self.write_script()?;
        print_status(
            script_file,
            "script written to",
            "script written to",
            &self.paths.script_file,
        );

        let startup_file = self.shell.startup_file(&self.paths.home);
        let path_export = self.ensure_path_export(&startup_file)?;
        print_status(
            path_export,
            "added git-user to PATH via",
            "PATH already set in",
            &startup_file,
        );

        let store = self.ensure_store()?;
        print_status(store, "created", "exists", &self.paths.store_file);

        if self.dry_run {
            println!("{}", "dry run, nothing was changed".yellow());
        } else {
            println!(
                "{}",
                "installation complete, you can now use the 'git-user' command".green()
            );
        }

        Ok(InstallReport {
            script_dir,
            script_file,
            path_export,
            store,
        })
    }

    fn ensure_script_dir(&self) -> Result<Effect, AppError> {
        if self.paths.script_dir.is_dir() {
            return Ok(Effect::AlreadyPresent);
        }
        if self.dry_run {
            return Ok(Effect::Pending);
        }
        fs::create_dir_all(&self.paths.script_dir)?;
        Ok(Effect::Applied)
    }

    /// Writes the switcher script, replacing any previous version
    fn write_script(&self) -> Result<Effect, AppError> {
        if self.dry_run {
            return Ok(Effect::Pending);
        }

        let path = &self.paths.script_file;
        fs::write(path, script::render(&self.paths.store_file))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }

        debug!(path = %path.display(), "wrote switcher script");
        Ok(Effect::Applied)
    }

    /// Appends the PATH export to the startup file unless it is already there
    fn ensure_path_export(&self, startup_file: &Path) -> Result<Effect, AppError> {
        let contents = match fs::read_to_string(startup_file) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AppError::ShellConfigMissing(startup_file.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };

        let export_line = self.shell.path_export_line();
        if contents.contains(export_line) {
            return Ok(Effect::AlreadyPresent);
        }
        if self.dry_run {
            return Ok(Effect::Pending);
        }

        let mut file = OpenOptions::new().append(true).open(startup_file)?;
        write!(file, "\n{}\n{}\n", PATH_COMMENT, export_line)?;
        debug!(path = %startup_file.display(), "appended PATH export");
        Ok(Effect::Applied)
    }

    fn ensure_store(&self) -> Result<Effect, AppError> {
        let store = ProfileStore::new(&self.paths.store_file);
        if store.path().exists() {
            return Ok(Effect::AlreadyPresent);
        }
        if self.dry_run {
            return Ok(Effect::Pending);
        }
        store.ensure_exists()?;
        Ok(Effect::Applied)
    }
}

fn print_status(effect: Effect, applied: &str, present: &str, path: &Path) {
    match effect {
        Effect::Applied => println!("{} {}", applied.green(), path.display()),
        Effect::AlreadyPresent => println!("{} {}", present.blue(), path.display()),
        Effect::Pending => println!("{} {} {}", "would apply:".yellow(), applied, path.display()),
    }
}
