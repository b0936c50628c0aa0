// wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use wcf_message::test::{mock_data, ConstantTimeProvider};
use wcf_message::{MessageViewBuilder, MissingRevokeId, ViewConfig};

mod callback_payloads;
mod revoke;

fn builder() -> MessageViewBuilder {
    MessageViewBuilder::new()
        .set_time_provider(ConstantTimeProvider::new(mock_data::reference_date()))
}

fn strict_builder() -> MessageViewBuilder {
    builder().set_config(ViewConfig {
        missing_revoke_id: MissingRevokeId::Reject,
        ..Default::default()
    })
}
