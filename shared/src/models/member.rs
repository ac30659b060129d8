//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role of a person in the congregation's directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    Member,
    Friend,
    #[serde(rename = "Outstation Member")]
    OutstationMember,
    Pastor,
    Exco,
    Admin,
}

impl UserType {
    /// Wire spelling used by the server in filters and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Member => "Member",
            UserType::Friend => "Friend",
            UserType::OutstationMember => "Outstation Member",
            UserType::Pastor => "Pastor",
            UserType::Exco => "Exco",
            UserType::Admin => "Admin",
        }
    }
}

/// Pastoral-care status of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Lost,
    NeedVisiting,
    NeedAttention,
}

/// Roster tab / server filter. Only these three types appear in the
/// attendance roster; the other [`UserType`] roles do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Member,
    Friend,
    #[serde(rename = "Outstation Member")]
    OutstationMember,
}

impl Category {
    /// Value for the `filter_type` query parameter and the `UserType`
    /// field of attendance updates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Member => "Member",
            Category::Friend => "Friend",
            Category::OutstationMember => "Outstation Member",
        }
    }
}

/// Member entity as returned by the directory endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    #[serde(rename = "UserName")]
    pub name: String,
    #[serde(rename = "UserFamilyName")]
    pub family_name: String,
    #[serde(rename = "UserType")]
    pub user_type: UserType,
    #[serde(rename = "UserStatus")]
    pub status: UserStatus,
    #[serde(rename = "UserGender")]
    pub gender: Option<String>,
    #[serde(rename = "UserMaritalStatus")]
    pub marital_status: Option<String>,
    #[serde(rename = "UserDOB", with = "crate::flags::opt_date", default)]
    pub dob: Option<NaiveDate>,
    #[serde(rename = "UserPhone")]
    pub phone: Option<String>,
    #[serde(rename = "UserEmail")]
    pub email: Option<String>,
    #[serde(rename = "UserAddress")]
    pub address: Option<String>,
    #[serde(rename = "UserChurchName")]
    pub church_name: Option<String>,
    #[serde(rename = "UserGroupID")]
    pub group_id: Option<i64>,
    /// Profile image URL.
    #[serde(rename = "UserProfile")]
    pub profile: Option<String>,
}

impl Member {
    /// `"FamilyName GivenName"` as shown in roster rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.family_name, self.name)
    }
}

/// Roster row: a member plus the attendance mark for the event being
/// viewed. `isMarked` arrives as the string `"0"`/`"1"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMember {
    #[serde(flatten)]
    pub member: Member,
    #[serde(rename = "isMarked", with = "crate::flags::bit_string", default)]
    pub is_marked: bool,
}

/// Create member payload (add-member / registration flows).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberCreate {
    #[serde(rename = "UserName")]
    #[validate(length(min = 1, message = "given name is required"))]
    pub name: String,
    #[serde(rename = "UserFamilyName")]
    #[validate(length(min = 1, message = "family name is required"))]
    pub family_name: String,
    #[serde(rename = "UserType")]
    pub user_type: UserType,
    #[serde(rename = "UserStatus")]
    pub status: UserStatus,
    #[serde(rename = "UserGender")]
    pub gender: Option<String>,
    #[serde(rename = "UserMaritalStatus")]
    pub marital_status: Option<String>,
    #[serde(rename = "UserDOB", with = "crate::flags::opt_date", default)]
    pub dob: Option<NaiveDate>,
    #[serde(rename = "UserPhone")]
    pub phone: Option<String>,
    #[serde(rename = "UserEmail")]
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    #[serde(rename = "UserAddress")]
    pub address: Option<String>,
    #[serde(rename = "UserChurchName")]
    pub church_name: Option<String>,
    #[serde(rename = "UserGroupID")]
    pub group_id: Option<i64>,
}

/// Update member payload; `None` fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    #[serde(rename = "UserName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "UserFamilyName", skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(rename = "UserType", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(rename = "UserStatus", skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(rename = "UserGender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "UserMaritalStatus", skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(
        rename = "UserDOB",
        with = "crate::flags::opt_date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dob: Option<NaiveDate>,
    #[serde(rename = "UserPhone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "UserEmail", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "UserAddress", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "UserChurchName", skip_serializing_if = "Option::is_none")]
    pub church_name: Option<String>,
    #[serde(rename = "UserGroupID", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}
