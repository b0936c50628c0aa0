// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Pattern matching over the XML fragments embedded in message content.

pub use mention::{is_mentioned, mentioned_ids, mentions_everyone};
pub use revoke::{RevokeNotice, REVOKE_SYSMSG_TYPE, SELF_REVOKE_TEXT};

mod mention;
mod patterns;
mod revoke;

/// Marker substrings the client embeds into media message content.
pub mod markers {
    pub const IMAGE: &str = "imgdatahash";
    pub const VOICE: &str = "voicemsg";
    pub const VIDEO: &str = "videomsg";
}
