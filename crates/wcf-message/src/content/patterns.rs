// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static SYSMSG_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<sysmsg type="(.*?)"\s?"#).unwrap());

pub(super) static REPLACE_MSG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<replacemsg><!\[CDATA\[(.*?)\]\]></replacemsg>").unwrap());

pub(super) static NEW_MSG_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<newmsgid>(.*?)</newmsgid>").unwrap());

pub(super) static AT_USER_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<atuserlist>(.*?)</atuserlist>").unwrap());

pub(super) static AT_EVERYONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(?:所有人|all|All)").unwrap());

/// First capture group of the leftmost match, if any.
pub(super) fn first_capture<'a>(regex: &Regex, haystack: &'a str) -> Option<&'a str> {
    regex
        .captures(haystack)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
