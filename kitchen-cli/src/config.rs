//! Environment file loading
//!
//! Looks for `.env` in the current directory, then `~/.kitchen/.env`.
//! Variables already set in the process environment always win.

use std::path::PathBuf;

/// Directory holding user-level settings (`~/.kitchen`)
pub fn kitchen_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kitchen"))
}

/// Candidate env files in load order
fn env_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(".env")];
    if let Some(dir) = kitchen_home() {
        files.push(dir.join(".env"));
    }
    files
}

/// Outcome of reading env files, kept so it can be logged once tracing is up
#[derive(Debug, Default)]
pub struct EnvFiles {
    pub loaded: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, dotenvy::Error)>,
}

impl EnvFiles {
    pub fn log(&self) {
        for path in &self.loaded {
            tracing::debug!("loaded environment from {}", path.display());
        }
        for (path, err) in &self.skipped {
            tracing::warn!(path = %path.display(), "skipping env file: {}", err);
        }
    }
}

/// Load every env file that exists. A malformed file is skipped, not fatal.
pub fn load_env_files() -> EnvFiles {
    let mut files = EnvFiles::default();
    for path in env_files().into_iter().filter(|path| path.is_file()) {
        match dotenvy::from_path(&path) {
            Ok(()) => files.loaded.push(path),
            Err(err) => files.skipped.push((path, err)),
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cwd_file_comes_first() {
        let files = env_files();
        assert_eq!(files[0], PathBuf::from(".env"));
        if let Some(home) = kitchen_home() {
            assert_eq!(files[1], home.join(".env"));
        }
    }
}
