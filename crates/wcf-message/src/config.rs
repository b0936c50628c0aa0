// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::content::SELF_REVOKE_TEXT;

/// What to do with a recall notice that carries no `<newmsgid>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MissingRevokeId {
    /// Treat it as a recall with an empty `revokmsgid` and log a warning.
    #[default]
    Tolerate,
    /// Fail the build with `MessageError::MissingRevokedMessageId`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Replacement text that marks a recall notice, "你撤回了一条消息" on a Chinese client.
    pub revoke_text: String,
    pub missing_revoke_id: MissingRevokeId,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            revoke_text: SELF_REVOKE_TEXT.to_string(),
            missing_revoke_id: MissingRevokeId::default(),
        }
    }
}
