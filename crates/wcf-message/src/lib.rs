// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

//! A normalized view over message records received from the WeChatFerry client.
//!
//! `RawMessage` mirrors the client's record. `MessageView` turns it into the mapping downstream
//! handlers work with and answers the usual questions about a message (is it an image, was it
//! recalled, am I @-mentioned).

pub use builder::MessageViewBuilder;
pub use config::{MissingRevokeId, ViewConfig};
pub use deps::{SystemTimeProvider, TimeProvider};
pub use types::{
    Field, FieldValue, Flag, MessageData, MessageError, MessageId, MessageType, MessageView,
    RawMessage, RoomId, UserId,
};

mod builder;
mod config;
pub mod content;
mod deps;
pub mod types;
