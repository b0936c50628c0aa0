// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::content::patterns::{first_capture, NEW_MSG_ID, REPLACE_MSG, SYSMSG_TYPE};
use crate::types::MessageId;

/// `type` attribute of the `<sysmsg>` element announcing a recalled message.
pub const REVOKE_SYSMSG_TYPE: &str = "revokemsg";

/// Replacement text the client shows when the account itself recalled a message.
pub const SELF_REVOKE_TEXT: &str = "你撤回了一条消息";

/// A recall notification found in a message's content.
///
/// Detection is independent from `MessageView` so it can run (and be tested) on bare content
/// strings. Only the first `<sysmsg type=…>`, `<replacemsg>` and `<newmsgid>` occurrences are
/// considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeNotice {
    /// The text that replaces the message content, e.g. "你撤回了一条消息".
    pub replacement: String,
    /// Id of the recalled message. `None` if the notice had no `<newmsgid>`.
    pub revoked_id: Option<MessageId>,
}

impl RevokeNotice {
    pub fn detect(content: &str) -> Option<Self> {
        Self::detect_with(content, SELF_REVOKE_TEXT)
    }

    pub fn detect_with(content: &str, replacement_text: &str) -> Option<Self> {
        let sysmsg_type = first_capture(&SYSMSG_TYPE, content)?;
        let replacement = first_capture(&REPLACE_MSG, content)?;

        if sysmsg_type != REVOKE_SYSMSG_TYPE || replacement != replacement_text {
            return None;
        }

        Some(RevokeNotice {
            replacement: replacement.to_string(),
            revoked_id: first_capture(&NEW_MSG_ID, content).map(MessageId::from),
        })
    }
}
