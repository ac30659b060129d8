//! Access Rights Model

use serde::{Deserialize, Serialize};

use super::UserType;

/// Per-role navigation visibility flags. The server stores these as
/// `"0"`/`"1"` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRights {
    pub user_type: UserType,
    #[serde(with = "crate::flags::bit_string")]
    pub dashboard: bool,
    #[serde(with = "crate::flags::bit_string")]
    pub report: bool,
    #[serde(with = "crate::flags::bit_string")]
    pub events: bool,
    #[serde(with = "crate::flags::bit_string")]
    pub settings: bool,
}
