//! JSON codecs for the persisted state categories.
//!
//! All three categories serialize to compact JSON text: the active-chat list
//! as an array of strings, the last-viewed ids as an object, message
//! collections as arrays of records whose field-level encoding comes from the
//! record's own serde implementation. Decode errors are returned to the
//! controller, which logs them and degrades to the empty default - they never
//! escape the public API.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Encode an ordered list of conversation names.
pub(crate) fn encode_string_list(items: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Decode an ordered list of conversation names.
pub(crate) fn decode_string_list(bytes: &[u8]) -> serde_json::Result<Vec<String>> {
    serde_json::from_slice(bytes)
}

/// Encode a conversation-name to message-id mapping.
pub(crate) fn encode_id_map(ids: &HashMap<String, i64>) -> serde_json::Result<String> {
    serde_json::to_string(ids)
}

/// Decode a conversation-name to message-id mapping.
pub(crate) fn decode_id_map(bytes: &[u8]) -> serde_json::Result<HashMap<String, i64>> {
    serde_json::from_slice(bytes)
}

/// Encode an ordered list of message records.
pub(crate) fn encode_messages<M: Serialize>(messages: &[M]) -> serde_json::Result<String> {
    serde_json::to_string(messages)
}

/// Decode an ordered list of message records.
pub(crate) fn decode_messages<M: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<Vec<M>> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Record {
        id: i64,
        text: String,
    }

    #[test]
    fn string_list_preserves_order_and_duplicates() {
        let chats = vec![
            "bob".to_string(),
            "alice".to_string(),
            "bob".to_string(),
        ];
        let text = encode_string_list(&chats).unwrap();
        assert_eq!(text, r#"["bob","alice","bob"]"#);
        assert_eq!(decode_string_list(text.as_bytes()).unwrap(), chats);
    }

    #[test]
    fn id_map_encodes_as_object() {
        let mut ids = HashMap::new();
        ids.insert("alice".to_string(), 42);
        let text = encode_id_map(&ids).unwrap();
        assert_eq!(text, r#"{"alice":42}"#);
        assert_eq!(decode_id_map(text.as_bytes()).unwrap(), ids);
    }

    #[test]
    fn messages_round_trip_in_order() {
        let messages = vec![
            Record {
                id: 1,
                text: "hi".to_string(),
            },
            Record {
                id: 2,
                text: "hello".to_string(),
            },
        ];
        let text = encode_messages(&messages).unwrap();
        assert_eq!(decode_messages::<Record>(text.as_bytes()).unwrap(), messages);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert!(decode_string_list(b"{ not json").is_err());
        assert!(decode_id_map(b"[1,2,3]").is_err());
        assert!(decode_messages::<Record>(b"\"scalar\"").is_err());
    }

    #[test]
    fn decode_rejects_truncated_array() {
        // Simulates a file cut off mid-write.
        assert!(decode_string_list(br#"["alice","bo"#).is_err());
    }

    #[test]
    fn decode_rejects_non_utf8_input() {
        assert!(decode_string_list(&[0xff, 0xfe, 0x5b]).is_err());
    }
}
