// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use wcf_utils::id_string;

pub use error::MessageError;
pub use field::{Field, FieldValue};
pub use message_type::MessageType;
pub use message_view::{MessageData, MessageView};
pub use raw_message::{Flag, RawMessage};

mod error;
mod field;
mod message_type;
mod message_view;
mod raw_message;

id_string!(
    /// Id of a single message, unique per account.
    MessageId
);
id_string!(
    /// A user's wxid.
    UserId
);
id_string!(
    /// Id of a group chat, e.g. `44300000001@chatroom`.
    RoomId
);
