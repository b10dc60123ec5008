use std::path::Path;

/// File name of the generated switcher script inside the scripts directory
pub const SCRIPT_NAME: &str = "git-user";

const TEMPLATE: &str = include_str!("../templates/git-user.sh");
const STORE_PLACEHOLDER: &str = "{{STORE_PATH}}";

/// Renders the switcher script for a profile store at `store_path`
pub fn render(store_path: &Path) -> String {
    TEMPLATE.replace(STORE_PLACEHOLDER, &shell_quote(&store_path.to_string_lossy()))
}

/// Quotes `value` as a single-quoted POSIX shell word
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_store_path() {
        let script = render(Path::new("/home/dev/.git-users"));
        assert!(script.starts_with("#!/usr/bin/env bash\n"));
        assert!(script.contains("CONFIG_FILE='/home/dev/.git-users'\n"));
        assert!(!script.contains(STORE_PLACEHOLDER));
    }

    #[test]
    fn test_shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("/home/o'neil/.git-users"), r"'/home/o'\''neil/.git-users'");
    }

    #[test]
    fn test_render_sets_global_identity() {
        let script = render(Path::new("/tmp/store"));
        assert!(script.contains(r#"git config --global user.name "$name""#));
        assert!(script.contains(r#"git config --global user.email "$email""#));
    }

    #[cfg(unix)]
    mod run {
        use crate::script::{SCRIPT_NAME, render};
        use std::{
            fs,
            io::Write,
            os::unix::fs::PermissionsExt,
            process::{Command, Stdio},
        };
        use tempfile::TempDir;

        /// Exit status, logged git arguments and store contents after one run
        struct Run {
            success: bool,
            git_calls: Vec<String>,
            store: String,
        }

        fn setup(store_contents: &str) -> TempDir {
            let tmp_dir = TempDir::new().expect("Failed to create temp dir");
            fs::write(tmp_dir.path().join(".git-users"), store_contents).unwrap();
            fs::write(
                tmp_dir.path().join(SCRIPT_NAME),
                render(&tmp_dir.path().join(".git-users")),
            )
            .unwrap();

            let fake_bin = tmp_dir.path().join("fake-bin");
            fs::create_dir(&fake_bin).unwrap();
            let fake_git = fake_bin.join("git");
            fs::write(&fake_git, "#!/bin/sh\nprintf '%s\\n' \"$*\" >> \"$GIT_LOG\"\n").unwrap();
            fs::set_permissions(&fake_git, fs::Permissions::from_mode(0o755)).unwrap();
            tmp_dir
        }

        fn run_script(tmp_dir: &TempDir, args: &[&str], input: &str) -> Run {
            let path = format!(
                "{}:{}",
                tmp_dir.path().join("fake-bin").display(),
                std::env::var("PATH").unwrap_or_default()
            );
            let git_log = tmp_dir.path().join("git.log");

            let mut child = Command::new("bash")
                .arg(tmp_dir.path().join(SCRIPT_NAME))
                .args(args)
                .env("PATH", path)
                .env("GIT_LOG", &git_log)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .unwrap();
            // The script may exit before reading, closing the pipe early
            let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
            let status = child.wait().unwrap();

            Run {
                success: status.success(),
                git_calls: fs::read_to_string(&git_log)
                    .unwrap_or_default()
                    .lines()
                    .map(str::to_string)
                    .collect(),
                store: fs::read_to_string(tmp_dir.path().join(".git-users")).unwrap(),
            }
        }

        #[test]
        fn test_switch_existing_key() {
            let tmp_dir = setup("work:name=Alice,email=alice@co.com\n");

            let run = run_script(&tmp_dir, &["work"], "");

            assert!(run.success);
            assert_eq!(
                run.git_calls,
                vec![
                    "config --global user.name Alice",
                    "config --global user.email alice@co.com"
                ]
            );
            assert_eq!(run.store, "work:name=Alice,email=alice@co.com\n");
        }

        #[test]
        fn test_missing_key_is_added_then_applied() {
            let tmp_dir = setup("");

            let run = run_script(&tmp_dir, &["personal"], "Bob\nbob@example.com\n");

            assert!(run.success);
            assert_eq!(run.store, "personal:name=Bob,email=bob@example.com\n");
            assert_eq!(
                run.git_calls,
                vec![
                    "config --global user.name Bob",
                    "config --global user.email bob@example.com"
                ]
            );
        }

        #[test]
        fn test_empty_key_is_usage_error() {
            let tmp_dir = setup("work:name=Alice,email=alice@co.com\n");

            let run = run_script(&tmp_dir, &[""], "Bob\nbob@example.com\n");

            assert!(!run.success);
            assert!(run.git_calls.is_empty());
            assert_eq!(run.store, "work:name=Alice,email=alice@co.com\n");
        }

        #[test]
        fn test_blank_name_leaves_store_unchanged() {
            let tmp_dir = setup("work:name=Alice,email=alice@co.com\n");

            let run = run_script(&tmp_dir, &["personal"], "\nbob@example.com\n");

            assert!(!run.success);
            assert!(run.git_calls.is_empty());
            assert_eq!(run.store, "work:name=Alice,email=alice@co.com\n");
        }

        #[test]
        fn test_malformed_line_is_invalid_configuration() {
            let tmp_dir = setup("broken:name=Alice\n");

            let run = run_script(&tmp_dir, &["broken"], "");

            assert!(!run.success);
            assert!(run.git_calls.is_empty());
            assert_eq!(run.store, "broken:name=Alice\n");
        }

        #[test]
        fn test_key_with_backslash_is_matched_literally() {
            let tmp_dir = setup("");

            let added = run_script(&tmp_dir, &[r"a\tb"], "N\ne@x\n");
            assert!(added.success);
            assert_eq!(added.store, "a\\tb:name=N,email=e@x\n");
            assert_eq!(
                added.git_calls,
                vec!["config --global user.name N", "config --global user.email e@x"]
            );

            // Second run finds the stored line instead of prompting again
            let switched = run_script(&tmp_dir, &[r"a\tb"], "");
            assert!(switched.success);
            assert_eq!(switched.store, "a\\tb:name=N,email=e@x\n");
            assert_eq!(switched.git_calls.len(), 4);
        }

        #[test]
        fn test_no_arguments_only_reads() {
            let tmp_dir = setup("work:name=Alice,email=alice@co.com\n");

            let run = run_script(&tmp_dir, &[], "");

            assert!(run.success);
            assert_eq!(run.git_calls, vec!["config user.name", "config user.email"]);
            assert_eq!(run.store, "work:name=Alice,email=alice@co.com\n");
        }
    }
}
