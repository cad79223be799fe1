//! Bearer token read from local storage.

use std::fs;
use std::path::PathBuf;

use crate::ports::TokenStore;

/// Environment variable consulted when the token file yields nothing.
pub const TOKEN_ENV_VAR: &str = "FOYER_API_TOKEN";

/// Token kept in a file on disk, with an environment variable fallback.
///
/// The token is re-read on every request so a fresh login is picked up without
/// restarting. A missing or empty token is not an error; the request simply goes
/// out unauthenticated and the backend decides.
#[derive(Debug, Clone, Default)]
pub struct FileTokenStore {
    path: Option<PathBuf>,
}

impl FileTokenStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn read_file(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        match fs::read_to_string(path) {
            Ok(content) => non_empty(content),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "token file unreadable");
                None
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

impl TokenStore for FileTokenStore {
    fn read_token(&self) -> Option<String> {
        self.read_file().or_else(|| std::env::var(TOKEN_ENV_VAR).ok().and_then(non_empty))
    }
}
