// classroom-chat/classroom-utils
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

extern crate self as classroom_utils;

pub use serde;

mod id_string_macro;
