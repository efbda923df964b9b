//! Logger setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so records never
//! go to stderr. They are appended to a file instead, and without a file
//! logging stays off.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialize the global logger writing to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns `Ok(false)`
/// when no path was given. Calling this twice is harmless.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let env = Env::default().default_filter_or(LevelFilter::Info.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_means_no_logger() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let err = init(Some(Path::new("/nonexistent-dir/bonk/arena.log"))).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
