// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use tracing::warn;

use crate::content::{self, markers, RevokeNotice};
use crate::deps::{SystemTimeProvider, TimeProvider};
use crate::types::{
    Field, FieldValue, Flag, MessageError, MessageId, MessageType, RawMessage, RoomId, UserId,
};
use crate::MessageViewBuilder;

/// The nested `data` block of a `MessageView`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    #[serde(rename = "type")]
    pub type_: u32,
    pub content: String,
    pub sender: UserId,
    pub msgid: MessageId,
    pub roomid: Option<RoomId>,
    pub xml: String,
    pub thumb: Option<String>,
    pub extra: Option<String>,
    /// Milliseconds since the epoch at which the view was built. Not the message's `ts`.
    pub time: i64,
}

impl MessageData {
    pub fn from_raw(raw: RawMessage, captured_at: DateTime<Utc>) -> Self {
        MessageData {
            type_: raw.type_,
            content: raw.content,
            sender: raw.sender.into(),
            msgid: raw.id.into(),
            roomid: non_empty(raw.roomid).map(RoomId::from),
            xml: raw.xml,
            thumb: non_empty(raw.thumb),
            extra: non_empty(raw.extra),
            time: captured_at.timestamp_millis(),
        }
    }
}

/// A normalized, read-only view over one `RawMessage`.
///
/// Serializes to the mapping downstream handlers consume:
///
/// ```json
/// {"isSelf":false,"isGroup":true,"isPyq":false,
///  "data":{"type":1,"content":"…","sender":"wxid_…","msgid":"…","roomid":"…@chatroom",
///          "xml":"…","thumb":null,"extra":null,"time":1700000000000},
///  "revokmsgid":null,"isRevokeMsg":false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    is_self: bool,
    is_group: bool,
    is_pyq: bool,
    data: MessageData,
    #[serde(rename = "revokmsgid")]
    revoked_msg_id: Option<MessageId>,
    is_revoke_msg: bool,
    #[serde(skip)]
    self_flag: Flag,
    #[serde(skip)]
    group_flag: Flag,
    #[serde(skip)]
    ts: u32,
    #[serde(skip)]
    sign: String,
}

impl MessageView {
    /// Builds a view stamped with the current system time. A recall notice without
    /// `<newmsgid>` is accepted and leaves `revokmsgid` empty.
    pub fn new(raw: RawMessage) -> Self {
        Self::with_time_provider(raw, &SystemTimeProvider::default())
    }

    pub fn with_time_provider(raw: RawMessage, time_provider: &dyn TimeProvider) -> Self {
        let view = Self::unrevoked(raw, time_provider.now());
        match RevokeNotice::detect(view.content()) {
            Some(notice) => view.applying_revoke(notice),
            None => view,
        }
    }

    pub fn builder() -> MessageViewBuilder {
        MessageViewBuilder::new()
    }

    pub(crate) fn unrevoked(raw: RawMessage, captured_at: DateTime<Utc>) -> Self {
        let self_flag = raw.is_self;
        let group_flag = raw.is_group;
        let ts = raw.ts;
        let sign = raw.sign.clone();

        MessageView {
            is_self: self_flag.is_set(),
            is_group: group_flag.is_set(),
            is_pyq: raw.type_ == 0,
            data: MessageData::from_raw(raw, captured_at),
            revoked_msg_id: None,
            is_revoke_msg: false,
            self_flag,
            group_flag,
            ts,
            sign,
        }
    }

    pub(crate) fn applying_revoke(mut self, notice: RevokeNotice) -> Self {
        if notice.revoked_id.is_none() {
            warn!(
                "Recall notice in message {} has no <newmsgid>, leaving revokmsgid empty.",
                self.data.msgid
            );
        }
        self.data.content = notice.replacement;
        self.revoked_msg_id = notice.revoked_id;
        self.is_revoke_msg = true;
        self
    }
}

impl MessageView {
    pub fn data(&self) -> &MessageData {
        &self.data
    }

    pub fn type_(&self) -> u32 {
        self.data.type_
    }

    pub fn kind(&self) -> MessageType {
        self.data.type_.into()
    }

    pub fn content(&self) -> &str {
        &self.data.content
    }

    pub fn sender(&self) -> &UserId {
        &self.data.sender
    }

    pub fn id(&self) -> &MessageId {
        &self.data.msgid
    }

    pub fn roomid(&self) -> Option<&RoomId> {
        self.data.roomid.as_ref()
    }

    pub fn xml(&self) -> &str {
        &self.data.xml
    }

    pub fn thumb(&self) -> Option<&str> {
        self.data.thumb.as_deref()
    }

    pub fn extra(&self) -> Option<&str> {
        self.data.extra.as_deref()
    }

    pub fn ts(&self) -> u32 {
        self.ts
    }

    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// The message's own timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.ts.into(), 0).single()
    }

    /// When this view was built.
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.data.time).single()
    }

    pub fn revoked_msg_id(&self) -> Option<&MessageId> {
        self.revoked_msg_id.as_ref()
    }

    pub fn get(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Content => Some(FieldValue::Text(&self.data.content)),
            Field::Sender => Some(FieldValue::Text(self.data.sender.as_ref())),
            Field::RoomId => self
                .data
                .roomid
                .as_ref()
                .map(|id| FieldValue::Text(id.as_ref())),
            Field::Xml => Some(FieldValue::Text(&self.data.xml)),
            Field::Thumb => self.data.thumb.as_deref().map(FieldValue::Text),
            Field::Extra => self.data.extra.as_deref().map(FieldValue::Text),
            Field::Type => Some(FieldValue::Integer(self.data.type_.into())),
            Field::Id => Some(FieldValue::Text(self.data.msgid.as_ref())),
            Field::Ts => Some(FieldValue::Integer(self.ts.into())),
            Field::Sign => Some(FieldValue::Text(&self.sign)),
        }
    }

    /// Looks up an attribute by its name. Unknown names resolve to `None`, same as
    /// attributes that are absent on this message.
    pub fn lookup(&self, name: &str) -> Option<FieldValue<'_>> {
        Field::from_name(name).ok().and_then(|field| self.get(field))
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, MessageError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl MessageView {
    pub fn is_image(&self) -> bool {
        self.data.type_ == 3 && self.data.content.contains(markers::IMAGE)
    }

    pub fn is_voice(&self) -> bool {
        self.data.type_ == 34 && self.data.content.contains(markers::VOICE)
    }

    pub fn is_video(&self) -> bool {
        self.data.type_ == 43 && self.data.content.contains(markers::VIDEO)
    }

    /// Moments (朋友圈) post.
    pub fn is_pyq(&self) -> bool {
        self.data.type_ == 0
    }

    pub fn is_text(&self) -> bool {
        self.data.type_ == 1
    }

    pub fn is_revoke(&self) -> bool {
        self.is_revoke_msg
    }

    /// True only if the client flagged the message with exactly `1`.
    pub fn from_self(&self) -> bool {
        self.self_flag.is_exactly_one()
    }

    pub fn from_group(&self) -> bool {
        self.group_flag.is_set()
    }

    /// Whether `user` is @-mentioned in this group message. Messages mentioning everyone
    /// don't count.
    pub fn is_at(&self, user: &str) -> bool {
        if !self.from_group() {
            return false;
        }
        content::is_mentioned(&self.data.xml, &self.data.content, user)
    }

    pub fn mentioned_ids(&self) -> Vec<UserId> {
        content::mentioned_ids(&self.data.xml)
    }

    pub fn mentions_everyone(&self) -> bool {
        content::mentions_everyone(&self.data.content)
    }
}

impl From<RawMessage> for MessageView {
    fn from(raw: RawMessage) -> Self {
        MessageView::new(raw)
    }
}

impl fmt::Display for MessageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
