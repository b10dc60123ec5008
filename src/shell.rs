use std::{fmt, path::{Path, PathBuf}};

/// Shells whose startup file receives the PATH export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    /// Maps a `$SHELL` value such as `/usr/bin/zsh` to a shell kind
    ///
    /// Only the basename is considered. Unknown or empty values fall back to
    /// [`ShellKind::Bash`].
    pub fn from_shell_path(shell: &str) -> Self {
        let name = Path::new(shell.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        match name {
            "zsh" => ShellKind::Zsh,
            "fish" => ShellKind::Fish,
            _ => ShellKind::Bash,
        }
    }

    /// Startup file of the shell, relative to the home directory
    pub fn startup_file(self, home: &Path) -> PathBuf {
        match self {
            ShellKind::Bash => home.join(".bashrc"),
            ShellKind::Zsh => home.join(".zshrc"),
            ShellKind::Fish => home.join(".config").join("fish").join("config.fish"),
        }
    }

    /// Statement that puts `$HOME/bin` in front of `PATH`
    pub fn path_export_line(self) -> &'static str {
        match self {
            ShellKind::Bash | ShellKind::Zsh => r#"export PATH="$HOME/bin:$PATH""#,
            ShellKind::Fish => "set -gx PATH $HOME/bin $PATH",
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
            ShellKind::Fish => "fish",
        };
        f.write_str(name)
    }
}
