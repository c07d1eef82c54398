//! chat-state - per-user on-disk session state for a chat client.
//!
//! Persists the pieces of session state worth having back after a restart:
//! which conversations are open, the last-viewed message id per conversation,
//! messages not yet confirmed sent, and a bounded recent-history cache per
//! conversation. Everything lives in plain JSON files under
//! `<root>/state/<user>/`, one file per state category.
//!
//! Persistence here is best-effort caching of reconstructible data, not a
//! source of truth: no operation returns an error to the caller. Loads report
//! what happened via [`LoadOutcome`] and degrade to the category's empty
//! default; saves report via [`SaveOutcome`], and a failed save is simply not
//! persisted. Failures are logged through `tracing`.

pub mod error;
pub mod key;
pub mod paths;
pub mod state;
pub mod user;

mod codec;
mod store;

pub use error::{Error, Result};
pub use key::StateKey;
pub use paths::{PathResolver, default_state_root};
pub use state::{LoadOutcome, MESSAGE_HISTORY_LIMIT, SaveOutcome, StateController};
pub use user::UserContext;
