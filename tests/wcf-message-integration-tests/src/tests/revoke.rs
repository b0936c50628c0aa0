// wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use wcf_message::test::{mock_data, RawMessageBuilder};
use wcf_message::{MessageError, MessageId, MessageView};

use super::{builder, strict_builder};

#[test]
fn test_revoke_rewrites_content() -> Result<()> {
    let raw = RawMessageBuilder::new_with_index(1)
        .set_type(10002)
        .set_sender(mock_data::ACCOUNT_ID)
        .set_is_self(1)
        .set_content(mock_data::revoke_content("revokemsg", Some("12345")))
        .build();

    let view = builder().build(raw)?;

    assert_eq!(
        view.to_json_value()?,
        json!({
            "isSelf": true,
            "isGroup": false,
            "isPyq": false,
            "data": {
                "type": 10002,
                "content": "你撤回了一条消息",
                "sender": "wxid_me",
                "msgid": "1000001",
                "roomid": null,
                "xml": "<msgsource />",
                "thumb": null,
                "extra": null,
                "time": mock_data::reference_date().timestamp_millis(),
            },
            "revokmsgid": "12345",
            "isRevokeMsg": true,
        })
    );
    assert_eq!(view.revoked_msg_id(), Some(&MessageId::from("12345")));
    Ok(())
}

#[test]
fn test_other_sysmsg_is_left_alone() -> Result<()> {
    let content = mock_data::revoke_content("pat", Some("12345"));
    let raw = RawMessageBuilder::new_with_index(1)
        .set_type(10002)
        .set_content(content.clone())
        .build();

    let view = builder().build(raw)?;

    assert!(!view.is_revoke());
    assert_eq!(view.revoked_msg_id(), None);
    assert_eq!(view.content(), content);
    Ok(())
}

#[test]
fn test_plain_message_is_not_a_revoke() -> Result<()> {
    let view = builder().build(RawMessageBuilder::new_with_index(1).build())?;
    assert!(!view.is_revoke());
    assert_eq!(view.to_json_value()?["revokmsgid"], json!(null));
    assert_eq!(view.content(), "Message 1");
    Ok(())
}

#[test]
fn test_missing_newmsgid_is_tolerated_by_default() {
    let raw = RawMessageBuilder::new_with_index(1)
        .set_type(10002)
        .set_content(mock_data::revoke_content("revokemsg", None))
        .build();

    let view = MessageView::new(raw);

    assert!(view.is_revoke());
    assert_eq!(view.revoked_msg_id(), None);
    assert_eq!(view.content(), "你撤回了一条消息");
}

#[test]
fn test_missing_newmsgid_is_rejected_when_strict() {
    let raw = RawMessageBuilder::new_with_index(4)
        .set_type(10002)
        .set_content(mock_data::revoke_content("revokemsg", None))
        .build();

    let result = strict_builder().build(raw);

    assert!(matches!(
        result,
        Err(MessageError::MissingRevokedMessageId { ref msgid }) if msgid.as_str() == "1000004"
    ));
}
