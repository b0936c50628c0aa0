// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::types::MessageError;

/// A boolean-ish flag as the client encodes it. The exact value is kept around since
/// `from_self` only accepts `1`, while everything else treats any non-zero value as set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Flag(u32);

impl Flag {
    pub const fn new(value: u32) -> Self {
        Flag(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_set(self) -> bool {
        self.0 != 0
    }

    pub fn is_exactly_one(self) -> bool {
        self.0 == 1
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag(value as u32)
    }
}

impl From<u32> for Flag {
    fn from(value: u32) -> Self {
        Flag(value)
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Int(u32),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Bool(value) => value.into(),
            Repr::Int(value) => value.into(),
        })
    }
}

/// One decoded message record as delivered by the client, before normalization.
///
/// Field names follow the client's record so that JSON callbacks decode as-is. Empty strings
/// stand for "not present" (e.g. `roomid` outside of group chats).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    pub is_self: Flag,
    pub is_group: Flag,
    #[serde(rename = "type")]
    pub type_: u32,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub ts: u32,
    pub sign: String,
    pub xml: String,
    pub sender: String,
    pub roomid: String,
    pub content: String,
    pub thumb: String,
    pub extra: String,
}

impl RawMessage {
    pub fn from_json(json: &str) -> Result<Self, MessageError> {
        serde_json::from_str(json).map_err(|err| {
            debug!("Failed to decode raw message: {}", err);
            MessageError::from(err)
        })
    }
}

// Message ids are 64-bit integers on the wire but some callbacks already stringify them.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Num(u64),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Str(s) => s,
        Repr::Num(n) => n.to_string(),
    })
}
