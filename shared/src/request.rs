//! Request DTOs
//!
//! Auth payloads used by the client. Directory and event payloads live
//! with their models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::MemberCreate;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request: a new member record plus the account credentials.
/// Validated client-side before submission; the server remains
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub member: MemberCreate,
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}
