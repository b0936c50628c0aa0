// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::config::{MissingRevokeId, ViewConfig};
use crate::content::RevokeNotice;
use crate::deps::{SystemTimeProvider, TimeProvider};
use crate::types::{MessageError, MessageView, RawMessage};

/// Builds `MessageView`s with a configurable clock and revoke handling. One builder can be
/// reused for any number of records.
pub struct MessageViewBuilder {
    time_provider: Box<dyn TimeProvider>,
    config: ViewConfig,
}

impl MessageViewBuilder {
    pub fn new() -> Self {
        MessageViewBuilder {
            time_provider: Box::new(SystemTimeProvider::default()),
            config: ViewConfig::default(),
        }
    }

    pub fn set_time_provider<P: TimeProvider + 'static>(mut self, time_provider: P) -> Self {
        self.time_provider = Box::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn build(&self, raw: RawMessage) -> Result<MessageView, MessageError> {
        let view = MessageView::unrevoked(raw, self.time_provider.now());

        let Some(notice) = RevokeNotice::detect_with(view.content(), &self.config.revoke_text)
        else {
            return Ok(view);
        };

        if notice.revoked_id.is_none() && self.config.missing_revoke_id == MissingRevokeId::Reject
        {
            return Err(MessageError::MissingRevokedMessageId {
                msgid: view.id().clone(),
            });
        }

        Ok(view.applying_revoke(notice))
    }
}

impl Default for MessageViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}
