//! API Response types
//!
//! Wire envelopes used by the remote API. List endpoints return
//! `{ data: [...], pagination: {...} }`; single resources use the same
//! `data` wrapper without pagination.

use serde::{Deserialize, Serialize};

use crate::models::{Event, Member, RosterMember};

/// Single-resource envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Pagination metadata as the server reports it (1-based pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
}

impl PageInfo {
    pub fn new(current_page: u32, last_page: u32, per_page: u32) -> Self {
        Self {
            current_page,
            last_page,
            per_page,
        }
    }

    /// Pagination for `total` items split into `per_page` chunks. An empty
    /// result still reports one (empty) page.
    pub fn for_total(current_page: u32, per_page: u32, total: usize) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            (total.div_ceil(per_page as usize)).max(1) as u32
        };
        Self::new(current_page, last_page, per_page)
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// One roster page: members of a single (category, search) pair with
/// their attendance marks for the event being viewed.
pub type RosterPage = Paginated<RosterMember>;

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Member,
}

/// Attendance report for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    pub event: Event,
    pub attendees: Vec<Member>,
}
