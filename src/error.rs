use crate::model::{AgeGroup, GenderCategory, House};

/// All errors that can occur during meet engine operations.
///
/// Every variant is a logical validation failure, not a system fault;
/// callers re-prompt or abort the single operation, never retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetError {
    /// Registration blocked because the student's gender does not fit the
    /// event's gender category.
    #[error("student {student_id} does not match the {category} gender category")]
    IneligibleGender {
        student_id: String,
        category: GenderCategory,
    },

    /// Registration blocked because the student's competition age falls
    /// outside the event's age group.
    #[error("student {student_id} (age {age}) is outside the {age_group} age group")]
    IneligibleAge {
        student_id: String,
        age: i32,
        age_group: AgeGroup,
    },

    /// The student is already registered for the maximum number of
    /// individual events.
    #[error("student {student_id} already registered for {cap} individual events")]
    StudentEventCapExceeded { student_id: String, cap: usize },

    /// The student's house is already at the registrant ceiling for this
    /// event.
    #[error("house {house} already has {capacity} registrations for event {event_id}")]
    HouseCapacityExceeded {
        house: House,
        event_id: String,
        capacity: usize,
    },

    /// A submitted placement result violates a structural invariant.
    #[error("invalid placement result: {reason}")]
    InvalidResult { reason: String },

    /// A submitted bonus award violates a structural invariant.
    #[error("invalid bonus award: {reason}")]
    InvalidBonusAward { reason: String },

    /// A student id did not resolve against the current roster.
    #[error("student {0} not found")]
    StudentNotFound(String),

    /// An event id did not resolve against the current event catalog.
    #[error("event {0} not found")]
    EventNotFound(String),
}

pub type Result<T> = std::result::Result<T, MeetError>;
