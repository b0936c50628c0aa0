// wcf-message/wcf-utils
//
// Copyright: 2024, The wcf-message Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
