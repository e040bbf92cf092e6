use std::collections::BTreeMap;

use tracing::warn;

use crate::model::{Event, House, PlacementResult, ScoreDelta, Student, StudentId};

/// Points for places one to three of an individual event.
const INDIVIDUAL_POINTS: [i32; 3] = [5, 3, 1];
/// Points for places one to three of a team event.
const TEAM_POINTS: [i32; 3] = [7, 5, 3];

/// Map one event's placements to per-house point and medal deltas.
///
/// Every student listed at a place receives the full place value and one
/// medal, independently of ties — a two-way gold tie hands out two full
/// first-place awards. Places four to six never score. Houses are resolved
/// from the current roster, so a retroactive house reassignment moves the
/// student's historical points with it; ids that no longer resolve are
/// skipped.
pub fn score_event(
    event: &Event,
    result: &PlacementResult,
    students: &[Student],
) -> BTreeMap<House, ScoreDelta> {
    let points = if event.is_team_event {
        TEAM_POINTS
    } else {
        INDIVIDUAL_POINTS
    };

    let mut deltas: BTreeMap<House, ScoreDelta> = BTreeMap::new();
    for (place, student_ids) in result.podium().into_iter().enumerate() {
        for student_id in student_ids {
            let Some(house) = resolve_house(students, student_id) else {
                warn!(event = %event.id, student = %student_id, "placed student not on roster");
                continue;
            };
            let delta = deltas.entry(house).or_default();
            delta.points += points[place];
            match place {
                0 => delta.gold += 1,
                1 => delta.silver += 1,
                _ => delta.bronze += 1,
            }
        }
    }
    deltas
}

fn resolve_house(students: &[Student], student_id: &StudentId) -> Option<House> {
    students
        .iter()
        .find(|s| &s.id == student_id)
        .map(|s| s.house)
}
