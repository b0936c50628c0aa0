// wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use wcf_message::{Field, FieldValue, MessageType, RawMessage};

use super::builder;

const IMAGE_CALLBACK: &str = r#"{
    "is_self": false,
    "is_group": true,
    "id": 6483920017652231184,
    "type": 3,
    "ts": 1716182040,
    "roomid": "44300000001@chatroom",
    "content": "<?xml version=\"1.0\"?><msg><img aeskey=\"k\" length=\"1024\" md5=\"m\" imgdatahash=\"1\" /></msg>",
    "sender": "wxid_peer",
    "sign": "b5d1",
    "thumb": "C:/WeChat Files/wxid_me/FileStorage/Cache/2024-05/abc_t.dat",
    "extra": "C:/WeChat Files/wxid_me/FileStorage/MsgAttach/abc.dat",
    "xml": "<msgsource><silence>0</silence></msgsource>"
}"#;

#[test]
fn test_image_callback() -> Result<()> {
    let view = builder().build(RawMessage::from_json(IMAGE_CALLBACK)?)?;

    assert!(view.is_image());
    assert!(!view.is_text());
    assert!(view.from_group());
    assert!(!view.from_self());
    assert_eq!(view.kind(), MessageType::Image);
    assert_eq!(view.get(Field::Type), Some(FieldValue::Integer(3)));
    assert_eq!(
        view.lookup("id").map(|v| v.to_string()),
        Some("6483920017652231184".to_string())
    );
    assert_eq!(
        view.extra(),
        Some("C:/WeChat Files/wxid_me/FileStorage/MsgAttach/abc.dat")
    );
    assert_eq!(view.ts(), 1716182040);
    assert_eq!(view.sign(), "b5d1");
    Ok(())
}

#[test]
fn test_unknown_type_code_is_passed_through() -> Result<()> {
    let view = builder().build(RawMessage::from_json(
        r#"{"id": "1", "type": 1234567, "content": "?"}"#,
    )?)?;

    assert_eq!(view.type_(), 1234567);
    assert_eq!(view.kind(), MessageType::Other(1234567));
    assert_eq!(view.to_json_value()?["data"]["type"], serde_json::json!(1234567));
    Ok(())
}
