//! Flock Client - HTTP client for the membership API
//!
//! Provides the typed HTTP client, session handling, and the attendance
//! roster state machine (server-paginated, filtered, searchable selection
//! reconciled against the remote source of truth).

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod roster;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use roster::{FetchPlan, FetchTicket, Pager, RosterController, RosterState, SelectionSet};
pub use session::{Session, SessionContext};

// Re-export shared types for convenience
pub use shared::{
    AccessRights, AttendanceUpdate, Category, Event, LoginResponse, Member, PageInfo, RosterMember,
    RosterPage,
};
