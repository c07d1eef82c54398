//! State categories: the public load/save surface.
//!
//! Four categories, each a load/save pair composed from the path resolver,
//! the raw file store, and a codec. Loads degrade to the category's empty
//! default on any failure; saves are best-effort and never return an error.
//! Both report which branch was taken via [`LoadOutcome`] and [`SaveOutcome`]
//! so callers and tests can tell an empty result from a failed one.

use crate::codec;
use crate::key::StateKey;
use crate::paths::{PathResolver, default_state_root};
use crate::store;
use crate::user::UserContext;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// Maximum number of history entries retained per conversation.
///
/// Applied at save time, keeping the most recent entries. Unsent messages are
/// deliberately not capped - they are pending work, not a cache.
pub const MESSAGE_HISTORY_LIMIT: usize = 30;

/// What happened during a load.
///
/// Every branch except `Loaded` degrades to the category's empty default via
/// [`LoadOutcome::into_value`]; the variants exist so the caller can tell a
/// genuinely empty state from a discarded one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    /// A persisted value was read and decoded.
    Loaded(T),

    /// Nobody is logged in; no I/O was attempted.
    NoUser,

    /// No file on disk for this key (never saved, or saved empty).
    NotFound,

    /// The file existed but did not decode; its content was discarded.
    Corrupt,

    /// The file could not be read, or the namespace directory could not be
    /// created.
    IoError,
}

impl<T> LoadOutcome<T> {
    /// Whether a persisted value was actually loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl<T: Default> LoadOutcome<T> {
    /// The loaded value, or the category's empty default.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Loaded(value) => value,
            _ => T::default(),
        }
    }
}

/// What happened during a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The value was encoded and written.
    Saved,

    /// The value was empty, so the file was deleted instead.
    Removed,

    /// Nobody is logged in; nothing was persisted.
    NoUser,

    /// Encoding or writing failed; the value was not persisted.
    Failed,
}

/// Loads and saves the chat client's per-user session state.
///
/// All state lives under `<base_dir>/state/<user>/`, one JSON file per
/// category. Message records are opaque to this layer: any serde-serializable
/// type works, and its field-level encoding is its own business.
///
/// Every operation is a single synchronous whole-file read or write; there is
/// no caching and no cross-call state. Concurrent callers must serialize
/// themselves.
#[derive(Debug, Clone)]
pub struct StateController {
    resolver: PathResolver,
}

impl StateController {
    /// Create a controller storing state under `base_dir`.
    #[must_use]
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            resolver: PathResolver::new(base_dir),
        }
    }

    /// The list of open conversations.
    #[must_use]
    pub fn load_active_chats(&self, ctx: &UserContext) -> LoadOutcome<Vec<String>> {
        self.load_with(ctx, &StateKey::ActiveChats, codec::decode_string_list)
    }

    /// Persist the list of open conversations. An empty list removes the file.
    pub fn save_active_chats(&self, ctx: &UserContext, chats: &[String]) -> SaveOutcome {
        self.save_with(ctx, &StateKey::ActiveChats, || {
            (!chats.is_empty()).then(|| codec::encode_string_list(chats))
        })
    }

    /// The last-viewed message id per conversation.
    #[must_use]
    pub fn load_last_viewed_ids(&self, ctx: &UserContext) -> LoadOutcome<HashMap<String, i64>> {
        self.load_with(ctx, &StateKey::MessageIds, codec::decode_id_map)
    }

    /// Persist the last-viewed message ids. An empty map removes the file.
    pub fn save_last_viewed_ids(
        &self,
        ctx: &UserContext,
        ids: &HashMap<String, i64>,
    ) -> SaveOutcome {
        self.save_with(ctx, &StateKey::MessageIds, || {
            (!ids.is_empty()).then(|| codec::encode_id_map(ids))
        })
    }

    /// Messages not yet confirmed delivered, for retry after a restart.
    #[must_use]
    pub fn load_unsent_messages<M: DeserializeOwned>(&self, ctx: &UserContext) -> LoadOutcome<Vec<M>> {
        self.load_with(ctx, &StateKey::UnsentMessages, |bytes| {
            codec::decode_messages(bytes)
        })
    }

    /// Persist the unsent messages. An empty collection removes the file.
    ///
    /// Unsent messages are not truncated; see [`MESSAGE_HISTORY_LIMIT`].
    pub fn save_unsent_messages<M: Serialize>(
        &self,
        ctx: &UserContext,
        messages: &[M],
    ) -> SaveOutcome {
        self.save_with(ctx, &StateKey::UnsentMessages, || {
            (!messages.is_empty()).then(|| codec::encode_messages(messages))
        })
    }

    /// The cached recent history for `conversation`, oldest first.
    #[must_use]
    pub fn load_messages<M: DeserializeOwned>(
        &self,
        ctx: &UserContext,
        conversation: &str,
    ) -> LoadOutcome<Vec<M>> {
        let key = StateKey::History(conversation.to_string());
        self.load_with(ctx, &key, |bytes| codec::decode_messages(bytes))
    }

    /// Persist the recent history for `conversation`, keeping at most the
    /// last [`MESSAGE_HISTORY_LIMIT`] entries. An empty history removes the
    /// file.
    ///
    /// Truncation happens before encoding on every save, so a previously
    /// longer file shrinks rather than merging.
    pub fn save_messages<M: Serialize>(
        &self,
        ctx: &UserContext,
        conversation: &str,
        messages: &[M],
    ) -> SaveOutcome {
        let key = StateKey::History(conversation.to_string());
        self.save_with(ctx, &key, || {
            if messages.is_empty() {
                return None;
            }
            let start = messages.len().saturating_sub(MESSAGE_HISTORY_LIMIT);
            Some(codec::encode_messages(&messages[start..]))
        })
    }

    fn load_with<T>(
        &self,
        ctx: &UserContext,
        key: &StateKey,
        decode: impl FnOnce(&[u8]) -> serde_json::Result<T>,
    ) -> LoadOutcome<T> {
        let Some(user) = ctx.user() else {
            return LoadOutcome::NoUser;
        };
        let Some(path) = self.resolver.resolve(user, key) else {
            return LoadOutcome::IoError;
        };
        match store::read(&path) {
            Ok(Some(bytes)) => match decode(&bytes) {
                Ok(value) => LoadOutcome::Loaded(value),
                Err(e) => {
                    warn!(%key, error = %e, "discarding malformed state file");
                    LoadOutcome::Corrupt
                }
            },
            Ok(None) => LoadOutcome::NotFound,
            Err(e) => {
                warn!(%key, error = %e, "failed to read state file");
                LoadOutcome::IoError
            }
        }
    }

    /// Shared save path. `encode` returns `None` when the value is empty,
    /// which deletes the file instead of writing an empty body - "no file"
    /// and "empty state" are the same condition on reload.
    fn save_with(
        &self,
        ctx: &UserContext,
        key: &StateKey,
        encode: impl FnOnce() -> Option<serde_json::Result<String>>,
    ) -> SaveOutcome {
        let Some(user) = ctx.user() else {
            return SaveOutcome::NoUser;
        };
        let Some(path) = self.resolver.resolve(user, key) else {
            return SaveOutcome::Failed;
        };
        match encode() {
            None => {
                store::delete(&path);
                SaveOutcome::Removed
            }
            Some(Ok(text)) => match store::write(&path, &text) {
                Ok(()) => SaveOutcome::Saved,
                Err(e) => {
                    warn!(%key, error = %e, "failed to write state file");
                    SaveOutcome::Failed
                }
            },
            Some(Err(e)) => {
                warn!(%key, error = %e, "failed to encode state");
                SaveOutcome::Failed
            }
        }
    }
}

impl Default for StateController {
    /// Controller rooted at [`default_state_root`].
    fn default() -> Self {
        Self::new(default_state_root())
    }
}
