// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use regex::Regex;
use tracing::error;

use crate::content::patterns::{first_capture, AT_EVERYONE, AT_USER_LIST};
use crate::types::UserId;

/// Whether `content` contains an "@everyone" mention ("@所有人", "@all" or "@All").
pub fn mentions_everyone(content: &str) -> bool {
    AT_EVERYONE.is_match(content)
}

/// Whether `user` appears inside the `<atuserlist>` of `xml` while `content` does not mention
/// everyone. The match is textual, so `user` also matches as a substring of a longer id.
pub fn is_mentioned(xml: &str, content: &str, user: &str) -> bool {
    let pattern = format!(
        r"<atuserlist>.*({}).*</atuserlist>",
        regex::escape(user)
    );
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => {
            error!("Failed to build mention pattern for {}: {}", user, err);
            return false;
        }
    };

    regex.is_match(xml) && !mentions_everyone(content)
}

/// The ids listed in the first `<atuserlist>` of `xml`.
pub fn mentioned_ids(xml: &str) -> Vec<UserId> {
    let Some(list) = first_capture(&AT_USER_LIST, xml) else {
        return vec![];
    };

    let list = list
        .trim()
        .trim_start_matches("<![CDATA[")
        .trim_end_matches("]]>");

    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(UserId::from)
        .collect()
}
