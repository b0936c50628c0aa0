// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::types::MessageError;

/// The attributes that can be looked up by name on a `MessageView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Content,
    Sender,
    RoomId,
    Xml,
    Thumb,
    Extra,
    Type,
    /// Alias for the `msgid` of the normalized data block.
    Id,
    Ts,
    Sign,
}

impl Field {
    pub fn from_name(name: &str) -> Result<Self, MessageError> {
        Field::from_str(name).map_err(|err| MessageError::unknown_field(name, err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(u64),
}

impl<'a> FieldValue<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(*text),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Integer(value) => Some(*value),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(value) => write!(f, "{}", value),
        }
    }
}
