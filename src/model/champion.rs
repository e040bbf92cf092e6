use serde::Serialize;

use super::event::EventId;
use super::house::House;
use super::student::StudentId;

/// A student with three or more individual-event wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatWinner {
    pub student_id: StudentId,
    pub full_name: String,
    pub house: House,
    pub wins: usize,
}

/// The winning house of one completed major game.
///
/// Resolved from the first listed first-place student only; a tie for gold
/// does not split this designation even though scoring credits every tied
/// student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorEventWinner {
    pub event_id: EventId,
    pub event_name: String,
    pub student_id: StudentId,
    pub student_name: String,
    pub house: House,
}

/// Derived champion designations over the full result history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Champions {
    /// Repeat individual winners, most wins first.
    pub individual: Vec<RepeatWinner>,
    /// One entry per completed major game with a recorded result.
    pub major_events: Vec<MajorEventWinner>,
}
