//! Diagnostic logging to stderr.
//!
//! Quiet by default (`warn`). Each `-v` raises the level one step and
//! `RUST_LOG` takes precedence over both:
//! ```bash
//! RUST_LOG=gituser=debug gituser install
//! ```

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a filter directive
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging. Call once at startup.
pub fn init(verbosity: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for(verbosity))
    };

    // Ignore a second initialisation instead of panicking
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }
}
