//! Logical state keys.

use std::fmt;

/// File extension for all persisted state files.
const STATE_EXTENSION: &str = ".sss";

/// Prefix for per-conversation history files.
const MESSAGES_PREFIX: &str = "messages_";

/// One persisted state category, mapping 1:1 to a file on disk.
///
/// The fixed keys name one file each; [`StateKey::History`] names one file per
/// conversation. File names are a stable on-disk format - changing them
/// orphans previously persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// Ordered list of currently open conversation names.
    ActiveChats,

    /// Last-viewed message id per conversation.
    MessageIds,

    /// Messages not yet confirmed delivered.
    UnsentMessages,

    /// Recent message history for one conversation.
    History(String),
}

impl StateKey {
    /// File name for this key, including the `.sss` extension.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::ActiveChats => format!("activeChats{STATE_EXTENSION}"),
            Self::MessageIds => format!("messageIds{STATE_EXTENSION}"),
            Self::UnsentMessages => format!("unsentMessages{STATE_EXTENSION}"),
            Self::History(conversation) => {
                format!("{MESSAGES_PREFIX}{conversation}{STATE_EXTENSION}")
            }
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveChats => f.write_str("activeChats"),
            Self::MessageIds => f.write_str("messageIds"),
            Self::UnsentMessages => f.write_str("unsentMessages"),
            Self::History(conversation) => write!(f, "{MESSAGES_PREFIX}{conversation}"),
        }
    }
}
