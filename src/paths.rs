//! Mapping logical state keys to files in the per-user namespace.

use crate::key::StateKey;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Subdirectory under the storage root holding all state namespaces.
const STATE_DIR: &str = "state";

/// Resolves a logical state key to an absolute file path under
/// `<base_dir>/state/<user>/`, creating the directory if needed.
///
/// Creates directories only - files are created and deleted by the layers
/// above.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at `base_dir`.
    #[must_use]
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The storage root this resolver was built with.
    #[must_use]
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path for `key` in `user`'s namespace, or `None` if the namespace
    /// directory cannot be created.
    ///
    /// A `None` here means the caller should skip I/O for this operation;
    /// the failure has already been logged.
    #[must_use]
    pub fn resolve(&self, user: &str, key: &StateKey) -> Option<PathBuf> {
        let dir = self.base_dir.join(STATE_DIR).join(user);
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "failed to create state directory");
            return None;
        }
        Some(dir.join(key.file_name()))
    }
}

/// Get the default storage root.
///
/// Uses the `CHAT_STATE_HOME` environment variable if set, otherwise the
/// platform cache directory plus `chat-state`, otherwise `.chat-state`
/// relative to the working directory.
#[must_use]
pub fn default_state_root() -> PathBuf {
    if let Ok(home) = std::env::var("CHAT_STATE_HOME") {
        PathBuf::from(home)
    } else if let Some(cache) = dirs::cache_dir() {
        cache.join("chat-state")
    } else {
        PathBuf::from(".chat-state")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_creates_user_directory() {
        let temp = TempDir::new().unwrap();
        let resolver = PathResolver::new(temp.path().to_path_buf());

        let path = resolver
            .resolve("alice", &StateKey::ActiveChats)
            .expect("resolve should succeed");

        assert!(temp.path().join("state").join("alice").is_dir());
        assert_eq!(path, temp.path().join("state/alice/activeChats.sss"));
    }

    #[test]
    fn resolve_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let resolver = PathResolver::new(temp.path().to_path_buf());

        let first = resolver.resolve("alice", &StateKey::MessageIds).unwrap();
        let second = resolver.resolve("alice", &StateKey::MessageIds).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_separates_users() {
        let temp = TempDir::new().unwrap();
        let resolver = PathResolver::new(temp.path().to_path_buf());

        let alice = resolver.resolve("alice", &StateKey::ActiveChats).unwrap();
        let bob = resolver.resolve("bob", &StateKey::ActiveChats).unwrap();
        assert_ne!(alice, bob);
    }

    #[test]
    fn resolve_never_creates_the_file() {
        let temp = TempDir::new().unwrap();
        let resolver = PathResolver::new(temp.path().to_path_buf());

        let path = resolver
            .resolve("alice", &StateKey::UnsentMessages)
            .unwrap();
        assert!(!path.exists());
    }
}
