// wcf-message/wcf-message
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use time_provider::{SystemTimeProvider, TimeProvider};

mod time_provider;
