use chrono::Utc;
use tracing::debug;

use crate::eligibility::{validate_registration, RegistrationCheck};
use crate::error::{MeetError, Result};
use crate::model::{
    ActivityAction, ActivityEntry, Actor, BonusAward, Event, EventStatus, House,
    PlacementResult, Registration, Student,
};

/// The consistent in-memory snapshot of all meet collections.
///
/// This is the storage surface the surrounding application owns, reduced to
/// an explicit value: the aggregation functions take it by shared reference
/// and fold over it without hidden state, while the submission entry points
/// mutate it. Serializing writes (at most one mutation in flight) is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct MeetSnapshot {
    /// Year used to derive competition ages from birth years.
    pub competition_year: i32,
    pub students: Vec<Student>,
    pub events: Vec<Event>,
    pub registrations: Vec<Registration>,
    pub results: Vec<PlacementResult>,
    pub bonus_awards: Vec<BonusAward>,
}

impl MeetSnapshot {
    pub fn new(competition_year: i32) -> Self {
        Self {
            competition_year,
            students: Vec::new(),
            events: Vec::new(),
            registrations: Vec::new(),
            results: Vec::new(),
            bonus_awards: Vec::new(),
        }
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// The recorded result for an event, if any. There is never more than
    /// one.
    pub fn result_for(&self, event_id: &str) -> Option<&PlacementResult> {
        self.results.iter().find(|r| r.event_id() == event_id)
    }

    /// Current house of a student, from the roster.
    pub fn house_of(&self, student_id: &str) -> Option<House> {
        self.student(student_id).map(|s| s.house)
    }

    /// Delete an event from the catalog. Registrations and results that
    /// reference it are deliberately left in place; they become orphaned
    /// references that every lookup treats as absent.
    pub fn remove_event(&mut self, event_id: &str) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == event_id)?;
        Some(self.events.remove(index))
    }

    /// Record the result of an event, replacing any prior result in place,
    /// and mark the event `Completed`. The status transition only ever
    /// happens here, as a side effect of submission.
    pub fn submit_result(&mut self, result: PlacementResult) -> Result<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == *result.event_id())
            .ok_or_else(|| MeetError::EventNotFound(result.event_id().clone()))?;
        event.status = EventStatus::Completed;
        debug!(event = %event.id, "recording placement result");

        match self
            .results
            .iter_mut()
            .find(|r| r.event_id() == result.event_id())
        {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
        Ok(())
    }

    /// Append a bonus award. Structural validation already happened in
    /// [`BonusAward::new`].
    pub fn submit_bonus_award(&mut self, award: BonusAward) {
        debug!(house = %award.house(), points = award.points(), "recording bonus award");
        self.bonus_awards.push(award);
    }

    /// Attempt to register a student for an event on behalf of `actor`.
    ///
    /// On acceptance the registration is persisted with the student's
    /// current house denormalized onto it, and the audit entry for the
    /// external activity log is returned. A duplicate attempt is a silent
    /// no-op yielding `Ok(None)`.
    pub fn register(
        &mut self,
        student_id: &str,
        event_id: &str,
        actor: &Actor,
    ) -> Result<Option<ActivityEntry>> {
        let student = self
            .student(student_id)
            .ok_or_else(|| MeetError::StudentNotFound(student_id.to_owned()))?
            .clone();
        let event = self
            .event(event_id)
            .ok_or_else(|| MeetError::EventNotFound(event_id.to_owned()))?
            .clone();

        match validate_registration(
            &student,
            &event,
            &self.registrations,
            &self.events,
            self.competition_year,
        )? {
            RegistrationCheck::Duplicate => Ok(None),
            RegistrationCheck::Accepted => {
                self.registrations.push(Registration {
                    event_id: event.id.clone(),
                    student_id: student.id.clone(),
                    house: student.house,
                });
                debug!(student = %student.id, event = %event.id, "registered");
                Ok(Some(activity_entry(
                    &student,
                    &event,
                    actor,
                    ActivityAction::Registered,
                )))
            }
        }
    }

    /// Remove a registration. Removal is unconditionally permitted; the
    /// audit entry is returned only when a registration actually existed and
    /// both the student and event still resolve for snapshotting its names.
    pub fn unregister(
        &mut self,
        student_id: &str,
        event_id: &str,
        actor: &Actor,
    ) -> Option<ActivityEntry> {
        let index = self
            .registrations
            .iter()
            .position(|r| r.event_id == event_id && r.student_id == student_id)?;
        self.registrations.remove(index);
        debug!(student = %student_id, event = %event_id, "unregistered");

        let student = self.student(student_id)?.clone();
        let event = self.event(event_id)?;
        Some(activity_entry(
            &student,
            event,
            actor,
            ActivityAction::Removed,
        ))
    }
}

fn activity_entry(
    student: &Student,
    event: &Event,
    actor: &Actor,
    action: ActivityAction,
) -> ActivityEntry {
    ActivityEntry {
        timestamp: Utc::now(),
        actor_username: actor.username.clone(),
        actor_role: actor.role,
        student_name: student.full_name.clone(),
        student_admission_no: student.admission_no.clone(),
        event_name: event.name.clone(),
        action,
        house: student.house,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{AgeGroup, EventCategory, Gender, GenderCategory, UserRole};

    use super::*;

    fn actor() -> Actor {
        Actor {
            username: "ankara_capt".into(),
            role: UserRole::Captain,
        }
    }

    fn sample_snapshot() -> MeetSnapshot {
        let mut snapshot = MeetSnapshot::new(2026);
        snapshot.students.push(Student {
            id: "s1".into(),
            full_name: "K. Perera".into(),
            admission_no: "7001".into(),
            grade: "12".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2008, 5, 15).unwrap(),
            gender: Gender::Male,
            house: House::Ankara,
        });
        snapshot.events.push(Event {
            id: "e1".into(),
            name: "100m Sprint".into(),
            category: EventCategory::Athletic,
            age_group: AgeGroup::Open,
            is_team_event: false,
            gender_category: GenderCategory::Boys,
            status: EventStatus::Open,
            judge_id: None,
            schedule: None,
        });
        snapshot
    }

    #[test]
    fn submitting_a_result_completes_the_event() {
        let mut snapshot = sample_snapshot();
        let result =
            PlacementResult::new("e1", vec!["s1".into()], vec![], vec![], "clean race").unwrap();
        snapshot.submit_result(result).unwrap();

        assert_eq!(snapshot.event("e1").unwrap().status, EventStatus::Completed);
        assert_eq!(
            snapshot.result_for("e1").unwrap().first(),
            &["s1".to_string()]
        );
    }

    #[test]
    fn resubmission_replaces_the_prior_result() {
        let mut snapshot = sample_snapshot();
        snapshot.students.push(Student {
            id: "s2".into(),
            full_name: "F. Ahmed".into(),
            admission_no: "8001".into(),
            grade: "13".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2007, 4, 10).unwrap(),
            gender: Gender::Male,
            house: House::Bagdad,
        });

        let first = PlacementResult::new("e1", vec!["s1".into()], vec![], vec![], "").unwrap();
        snapshot.submit_result(first).unwrap();
        let corrected =
            PlacementResult::new("e1", vec!["s2".into()], vec![], vec![], "protest upheld")
                .unwrap();
        snapshot.submit_result(corrected).unwrap();

        assert_eq!(snapshot.results.len(), 1);
        assert_eq!(
            snapshot.result_for("e1").unwrap().first(),
            &["s2".to_string()]
        );
    }

    #[test]
    fn result_for_unknown_event_is_rejected() {
        let mut snapshot = sample_snapshot();
        let result = PlacementResult::new("gone", vec!["s1".into()], vec![], vec![], "").unwrap();
        assert!(matches!(
            snapshot.submit_result(result),
            Err(MeetError::EventNotFound(_))
        ));
        assert!(snapshot.results.is_empty());
    }

    #[test]
    fn register_persists_and_emits_an_audit_entry() {
        let mut snapshot = sample_snapshot();
        let entry = snapshot.register("s1", "e1", &actor()).unwrap().unwrap();

        assert_eq!(snapshot.registrations.len(), 1);
        assert_eq!(snapshot.registrations[0].house, House::Ankara);
        assert_eq!(entry.action, ActivityAction::Registered);
        assert_eq!(entry.student_name, "K. Perera");
        assert_eq!(entry.student_admission_no, "7001");
        assert_eq!(entry.event_name, "100m Sprint");
        assert_eq!(entry.actor_role, UserRole::Captain);
        assert_eq!(entry.house, House::Ankara);
    }

    #[test]
    fn duplicate_registration_is_a_silent_no_op() {
        let mut snapshot = sample_snapshot();
        snapshot.register("s1", "e1", &actor()).unwrap();
        let second = snapshot.register("s1", "e1", &actor()).unwrap();

        assert!(second.is_none());
        assert_eq!(snapshot.registrations.len(), 1);
    }

    #[test]
    fn register_against_missing_records_is_an_explicit_not_found() {
        let mut snapshot = sample_snapshot();
        assert!(matches!(
            snapshot.register("ghost", "e1", &actor()),
            Err(MeetError::StudentNotFound(_))
        ));
        assert!(matches!(
            snapshot.register("s1", "gone", &actor()),
            Err(MeetError::EventNotFound(_))
        ));
    }

    #[test]
    fn unregister_removes_and_emits_only_when_something_existed() {
        let mut snapshot = sample_snapshot();
        snapshot.register("s1", "e1", &actor()).unwrap();

        let entry = snapshot.unregister("s1", "e1", &actor()).unwrap();
        assert_eq!(entry.action, ActivityAction::Removed);
        assert!(snapshot.registrations.is_empty());

        assert!(snapshot.unregister("s1", "e1", &actor()).is_none());
    }

    #[test]
    fn deleting_an_event_does_not_cascade() {
        let mut snapshot = sample_snapshot();
        snapshot.register("s1", "e1", &actor()).unwrap();
        let result = PlacementResult::new("e1", vec!["s1".into()], vec![], vec![], "").unwrap();
        snapshot.submit_result(result).unwrap();

        assert!(snapshot.remove_event("e1").is_some());
        assert!(snapshot.event("e1").is_none());
        // Orphans stay behind and lookups stay total.
        assert_eq!(snapshot.registrations.len(), 1);
        assert_eq!(snapshot.results.len(), 1);
        assert!(snapshot.result_for("e1").is_some());
    }
}
