use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::model::{Champions, EventCategory, EventStatus, MajorEventWinner, RepeatWinner};
use crate::snapshot::MeetSnapshot;

/// First-place finishes in individual events needed to be reported as a
/// repeat winner.
pub const REPEAT_WINNER_THRESHOLD: usize = 3;

/// Derive the champion designations from the full result history.
///
/// Repeat winners count first-place appearances in non-team events only;
/// every student sharing a gold counts a win. The major-game house winner is
/// resolved from the first listed first-place student alone — a deliberate
/// single-winner view, unlike the tie-aware scoring. Results or students
/// that no longer resolve are skipped; empty inputs yield empty lists.
#[instrument(skip(snapshot))]
pub fn compute_champions(snapshot: &MeetSnapshot) -> Champions {
    let win_counts = snapshot
        .results
        .iter()
        .filter(|result| {
            snapshot
                .event(result.event_id())
                .is_some_and(|event| !event.is_team_event)
        })
        .flat_map(|result| result.first().iter())
        .counts();

    let individual: Vec<RepeatWinner> = win_counts
        .into_iter()
        .filter(|(_, wins)| *wins >= REPEAT_WINNER_THRESHOLD)
        .filter_map(|(student_id, wins)| {
            let Some(student) = snapshot.student(student_id) else {
                warn!(student = %student_id, "repeat winner not on roster");
                return None;
            };
            Some(RepeatWinner {
                student_id: student.id.clone(),
                full_name: student.full_name.clone(),
                house: student.house,
                wins,
            })
        })
        .sorted_by(|a, b| b.wins.cmp(&a.wins).then(a.full_name.cmp(&b.full_name)))
        .collect();

    let major_events: Vec<MajorEventWinner> = snapshot
        .events
        .iter()
        .filter(|event| {
            event.category == EventCategory::MajorGame && event.status == EventStatus::Completed
        })
        .filter_map(|event| {
            let result = snapshot.result_for(&event.id)?;
            let winner_id = result.first().first()?;
            let Some(student) = snapshot.student(winner_id) else {
                warn!(event = %event.id, student = %winner_id, "winner not on roster");
                return None;
            };
            Some(MajorEventWinner {
                event_id: event.id.clone(),
                event_name: event.name.clone(),
                student_id: student.id.clone(),
                student_name: student.full_name.clone(),
                house: student.house,
            })
        })
        .collect();

    debug!(
        repeat_winners = individual.len(),
        major_events = major_events.len(),
        "champions derived"
    );

    Champions {
        individual,
        major_events,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{
        AgeGroup, Event, Gender, GenderCategory, House, PlacementResult, Student,
    };

    use super::*;

    fn student(id: &str, name: &str, house: House) -> Student {
        Student {
            id: id.into(),
            full_name: name.into(),
            admission_no: format!("7{id}"),
            grade: "11".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2009, 1, 1).unwrap(),
            gender: Gender::Female,
            house,
        }
    }

    fn event(id: &str, name: &str, category: EventCategory, is_team: bool) -> Event {
        Event {
            id: id.into(),
            name: name.into(),
            category,
            age_group: AgeGroup::Open,
            is_team_event: is_team,
            gender_category: GenderCategory::Mixed,
            status: EventStatus::Open,
            judge_id: None,
            schedule: None,
        }
    }

    fn win(snapshot: &mut MeetSnapshot, event_id: &str, student_id: &str) {
        snapshot
            .submit_result(
                PlacementResult::new(event_id, vec![student_id.into()], vec![], vec![], "")
                    .unwrap(),
            )
            .unwrap();
    }

    fn base_snapshot() -> MeetSnapshot {
        let mut snapshot = MeetSnapshot::new(2026);
        snapshot.students = vec![
            student("s1", "N. Silva", House::Ankara),
            student("s2", "S. Peiris", House::Bagdad),
            student("s3", "F. Nuzha", House::Cairo),
        ];
        snapshot
    }

    #[test]
    fn three_individual_wins_make_a_champion_two_do_not() {
        let mut snapshot = base_snapshot();
        for i in 1..=5 {
            snapshot.events.push(event(
                &format!("e{i}"),
                &format!("Race {i}"),
                EventCategory::Athletic,
                false,
            ));
        }
        for id in ["e1", "e2", "e3"] {
            win(&mut snapshot, id, "s1");
        }
        for id in ["e4", "e5"] {
            win(&mut snapshot, id, "s2");
        }

        let champions = compute_champions(&snapshot);
        assert_eq!(champions.individual.len(), 1);
        assert_eq!(champions.individual[0].student_id, "s1");
        assert_eq!(champions.individual[0].wins, 3);
        assert_eq!(champions.individual[0].house, House::Ankara);
    }

    #[test]
    fn team_event_wins_do_not_count() {
        let mut snapshot = base_snapshot();
        for i in 1..=3 {
            snapshot.events.push(event(
                &format!("e{i}"),
                &format!("Relay {i}"),
                EventCategory::Athletic,
                true,
            ));
            win(&mut snapshot, &format!("e{i}"), "s1");
        }

        let champions = compute_champions(&snapshot);
        assert!(champions.individual.is_empty());
    }

    #[test]
    fn repeat_winners_sort_by_wins_descending() {
        let mut snapshot = base_snapshot();
        for i in 1..=7 {
            snapshot.events.push(event(
                &format!("e{i}"),
                &format!("Race {i}"),
                EventCategory::Athletic,
                false,
            ));
        }
        for id in ["e1", "e2", "e3", "e4"] {
            win(&mut snapshot, id, "s2");
        }
        for id in ["e5", "e6", "e7"] {
            win(&mut snapshot, id, "s3");
        }

        let champions = compute_champions(&snapshot);
        let order: Vec<(&str, usize)> = champions
            .individual
            .iter()
            .map(|w| (w.student_id.as_str(), w.wins))
            .collect();
        assert_eq!(order, vec![("s2", 4), ("s3", 3)]);
    }

    #[test]
    fn major_event_winner_uses_only_the_first_listed_student() {
        let mut snapshot = base_snapshot();
        snapshot
            .events
            .push(event("e1", "Volleyball", EventCategory::MajorGame, true));
        snapshot
            .submit_result(
                PlacementResult::new("e1", vec!["s2".into(), "s3".into()], vec![], vec![], "")
                    .unwrap(),
            )
            .unwrap();

        let champions = compute_champions(&snapshot);
        assert_eq!(champions.major_events.len(), 1);
        let winner = &champions.major_events[0];
        assert_eq!(winner.event_name, "Volleyball");
        assert_eq!(winner.student_id, "s2");
        assert_eq!(winner.house, House::Bagdad);
    }

    #[test]
    fn only_completed_major_games_are_reported() {
        let mut snapshot = base_snapshot();
        // A completed athletic event and a major game without a result.
        snapshot
            .events
            .push(event("e1", "100m", EventCategory::Athletic, false));
        win(&mut snapshot, "e1", "s1");
        snapshot
            .events
            .push(event("e2", "Cricket", EventCategory::MajorGame, true));

        let champions = compute_champions(&snapshot);
        assert!(champions.major_events.is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty_champions() {
        let champions = compute_champions(&MeetSnapshot::new(2026));
        assert!(champions.individual.is_empty());
        assert!(champions.major_events.is_empty());
    }
}
