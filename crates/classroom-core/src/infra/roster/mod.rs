// classroom-chat/classroom-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use json_roster::roster_from_json;
pub use school_roster::school_roster;

mod json_roster;
mod school_roster;
