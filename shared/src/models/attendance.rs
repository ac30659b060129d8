//! Attendance update payload

use serde::{Deserialize, Serialize};

use super::Category;

/// Body for `POST event/updateAttendance/{eventId}`.
///
/// The server toggles the presence of each listed member for the event, so
/// mark and unmark use the same body. The roster controller always sends a
/// single id per call; a lost request then desynchronizes at most one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    #[serde(rename = "UserType")]
    pub user_type: Category,
    pub users: Vec<i64>,
}

impl AttendanceUpdate {
    /// Update for one toggled member.
    pub fn single(category: Category, member_id: i64) -> Self {
        Self {
            user_type: category,
            users: vec![member_id],
        }
    }
}
