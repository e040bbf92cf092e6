use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::event::EventId;
use super::house::House;
use super::student::StudentId;

/// A student's enrollment in an event.
///
/// `house` is a snapshot of the student's house at registration time. It
/// feeds the per-house capacity check only; scoring always resolves the
/// student's current house instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub event_id: EventId,
    pub student_id: StudentId,
    pub house: House,
}

/// Role of the user performing a registration change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Editor,
    Captain,
    Judge,
}

/// The user on whose behalf a registration change is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub username: String,
    pub role: UserRole,
}

/// What happened to a registration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    Registered,
    Removed,
}

/// An immutable audit record of one registration change. Names are
/// snapshotted at the time of the action so the entry survives later edits
/// or deletions of the student and event.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub actor_username: String,
    pub actor_role: UserRole,
    pub student_name: String,
    pub student_admission_no: String,
    pub event_name: String,
    pub action: ActivityAction,
    pub house: House,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels_use_screaming_case() {
        assert_eq!(ActivityAction::Registered.to_string(), "REGISTERED");
        assert_eq!(ActivityAction::Removed.to_string(), "REMOVED");
        assert_eq!(UserRole::Captain.to_string(), "CAPTAIN");
    }
}
