// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::types::MessageId;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Unknown message field: {name}")]
    UnknownField {
        name: String,
        #[source]
        source: strum::ParseError,
    },
    #[error("Revoke notice {msgid} does not carry a <newmsgid>")]
    MissingRevokedMessageId { msgid: MessageId },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MessageError {
    pub fn unknown_field(name: &str, source: strum::ParseError) -> Self {
        MessageError::UnknownField {
            name: name.to_string(),
            source,
        }
    }
}
