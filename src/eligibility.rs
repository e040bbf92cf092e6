use tracing::debug;

use crate::error::{MeetError, Result};
use crate::model::{Event, Registration, Student};

/// Maximum number of individual events a single student may enter.
pub const INDIVIDUAL_EVENT_CAP: usize = 3;
/// Registrant ceiling per house for an individual event.
pub const HOUSE_CAPACITY_INDIVIDUAL: usize = 2;
/// Registrant ceiling per house for a team event.
pub const HOUSE_CAPACITY_TEAM: usize = 25;

/// Outcome of a passing eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationCheck {
    /// The registration may be persisted.
    Accepted,
    /// The pair is already registered; treat as a silent no-op, not an
    /// error.
    Duplicate,
}

/// Decide whether `student` may be registered for `event`, given the current
/// registration set.
///
/// Checks run in a fixed order and the first failure aborts with its own
/// error: gender fit, age-group fit, the per-student individual-event cap,
/// then the per-house capacity for this event. An existing registration for
/// the same pair short-circuits to [`RegistrationCheck::Duplicate`].
///
/// `events` is the full catalog, needed to classify the student's existing
/// registrations; registrations whose event no longer resolves are ignored
/// by the cap check. Removal of a registration needs no validation and is
/// always permitted.
pub fn validate_registration(
    student: &Student,
    event: &Event,
    registrations: &[Registration],
    events: &[Event],
    competition_year: i32,
) -> Result<RegistrationCheck> {
    if !event.gender_category.admits(student.gender) {
        return Err(MeetError::IneligibleGender {
            student_id: student.id.clone(),
            category: event.gender_category,
        });
    }

    let age = student.competition_age(competition_year);
    if !event.age_group.admits(age) {
        return Err(MeetError::IneligibleAge {
            student_id: student.id.clone(),
            age,
            age_group: event.age_group,
        });
    }

    if !event.is_team_event {
        let individual_count = registrations
            .iter()
            .filter(|r| r.student_id == student.id && r.event_id != event.id)
            .filter(|r| {
                events
                    .iter()
                    .find(|e| e.id == r.event_id)
                    .is_some_and(|e| !e.is_team_event)
            })
            .count();
        if individual_count >= INDIVIDUAL_EVENT_CAP {
            return Err(MeetError::StudentEventCapExceeded {
                student_id: student.id.clone(),
                cap: INDIVIDUAL_EVENT_CAP,
            });
        }
    }

    // Capacity counts the house recorded on each registration, not the
    // students' current houses.
    let capacity = if event.is_team_event {
        HOUSE_CAPACITY_TEAM
    } else {
        HOUSE_CAPACITY_INDIVIDUAL
    };
    let house_count = registrations
        .iter()
        .filter(|r| r.event_id == event.id && r.house == student.house)
        .count();
    if house_count >= capacity {
        return Err(MeetError::HouseCapacityExceeded {
            house: student.house,
            event_id: event.id.clone(),
            capacity,
        });
    }

    let duplicate = registrations
        .iter()
        .any(|r| r.event_id == event.id && r.student_id == student.id);
    if duplicate {
        debug!(student = %student.id, event = %event.id, "already registered");
        return Ok(RegistrationCheck::Duplicate);
    }

    Ok(RegistrationCheck::Accepted)
}
