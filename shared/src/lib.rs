//! Shared types for the Flock membership client
//!
//! Wire models, request/response DTOs, and serde adapters shared between
//! the HTTP client and test harnesses. The remote API is the source of
//! truth for all of these shapes; this crate only gives them names and
//! static types.

pub mod flags;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AccessRights, AttendanceUpdate, Category, Event, EventCreate, EventUpdate, Member,
    MemberCreate, MemberUpdate, RosterMember, UserStatus, UserType,
};
pub use response::{Envelope, EventReport, LoginResponse, PageInfo, Paginated, RosterPage};
