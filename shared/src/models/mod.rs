//! Wire models
//!
//! One file per entity, each carrying the entity plus its create/update
//! payloads.

pub mod attendance;
pub mod event;
pub mod member;
pub mod rights;

pub use attendance::AttendanceUpdate;
pub use event::{Event, EventCreate, EventUpdate};
pub use member::{Category, Member, MemberCreate, MemberUpdate, RosterMember, UserStatus, UserType};
pub use rights::AccessRights;
