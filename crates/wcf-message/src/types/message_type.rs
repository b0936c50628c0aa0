// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The message type codes the view classifies. Any other code is kept in `Other` so that the
/// conversion from and to `u32` is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum MessageType {
    /// A moments (朋友圈) post.
    Moments,
    Text,
    Image,
    Voice,
    Video,
    Other(u32),
}

impl From<u32> for MessageType {
    fn from(code: u32) -> Self {
        match code {
            0 => MessageType::Moments,
            1 => MessageType::Text,
            3 => MessageType::Image,
            34 => MessageType::Voice,
            43 => MessageType::Video,
            other => MessageType::Other(other),
        }
    }
}

impl From<MessageType> for u32 {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Moments => 0,
            MessageType::Text => 1,
            MessageType::Image => 3,
            MessageType::Voice => 34,
            MessageType::Video => 43,
            MessageType::Other(code) => code,
        }
    }
}
