//! Event Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event entity. Attendance marks hang off an event by member id; the
/// server carries the running total in `totalattendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "EventName")]
    pub name: String,
    #[serde(rename = "EventType")]
    pub event_type: String,
    #[serde(rename = "EventDate")]
    pub date: NaiveDate,
    /// `HH:MM`, kept as the server sends it.
    #[serde(rename = "EventTime")]
    pub time: String,
    #[serde(rename = "EventLeader")]
    pub leader: Option<String>,
    #[serde(rename = "EventChurchName")]
    pub church_name: Option<String>,
    #[serde(rename = "totalattendance", default)]
    pub total_attendance: i64,
}

/// Create event payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventCreate {
    #[serde(rename = "EventName")]
    #[validate(length(min = 1, message = "event name is required"))]
    pub name: String,
    #[serde(rename = "EventType")]
    pub event_type: String,
    #[serde(rename = "EventDate")]
    pub date: NaiveDate,
    #[serde(rename = "EventTime")]
    pub time: String,
    #[serde(rename = "EventLeader")]
    pub leader: Option<String>,
    #[serde(rename = "EventChurchName")]
    pub church_name: Option<String>,
}

/// Update event payload; `None` fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(rename = "EventName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "EventType", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(rename = "EventDate", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "EventTime", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "EventLeader", skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
    #[serde(rename = "EventChurchName", skip_serializing_if = "Option::is_none")]
    pub church_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_from_wire() {
        let event: Event = serde_json::from_value(json!({
            "id": 9,
            "EventName": "Sunday Service",
            "EventType": "Service",
            "EventDate": "2024-11-03",
            "EventTime": "09:30",
            "EventLeader": "Pastor Chen",
            "EventChurchName": "Grace Chapel",
            "totalattendance": 57,
        }))
        .unwrap();
        assert_eq!(event.name, "Sunday Service");
        assert_eq!(event.date.to_string(), "2024-11-03");
        assert_eq!(event.total_attendance, 57);
    }

    #[test]
    fn total_attendance_defaults_to_zero() {
        let event: Event = serde_json::from_value(json!({
            "id": 10,
            "EventName": "Prayer Meeting",
            "EventType": "Prayer",
            "EventDate": "2024-11-06",
            "EventTime": "19:00",
            "EventLeader": null,
            "EventChurchName": null,
        }))
        .unwrap();
        assert_eq!(event.total_attendance, 0);
    }
}
