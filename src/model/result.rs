use std::collections::HashSet;

use serde::Serialize;

use crate::error::{MeetError, Result};

use super::event::EventId;
use super::student::StudentId;

/// The recorded outcome of one event.
///
/// `first`, `second` and `third` are duplicate-free sets of student ids so
/// that ties can share a place. Places four to six hold at most one student
/// each and are informational only; they never score. Fields are private:
/// the constructor is the only way to obtain a result, so every value in
/// circulation satisfies the invariants (non-empty first place, no student
/// in more than one place).
#[derive(Debug, Clone, Serialize)]
pub struct PlacementResult {
    event_id: EventId,
    first: Vec<StudentId>,
    second: Vec<StudentId>,
    third: Vec<StudentId>,
    fourth: Option<StudentId>,
    fifth: Option<StudentId>,
    sixth: Option<StudentId>,
    remarks: String,
}

impl PlacementResult {
    /// Build a result for the podium places. `second` and `third` may be
    /// empty; `first` must not be.
    pub fn new(
        event_id: impl Into<EventId>,
        first: Vec<StudentId>,
        second: Vec<StudentId>,
        third: Vec<StudentId>,
        remarks: impl Into<String>,
    ) -> Result<Self> {
        let result = Self {
            event_id: event_id.into(),
            first,
            second,
            third,
            fourth: None,
            fifth: None,
            sixth: None,
            remarks: remarks.into(),
        };
        result.validate()?;
        Ok(result)
    }

    /// Attach the informational places four to six. Only meaningful for
    /// individual events; the same no-duplicate rule applies.
    pub fn with_minor_places(
        mut self,
        fourth: Option<StudentId>,
        fifth: Option<StudentId>,
        sixth: Option<StudentId>,
    ) -> Result<Self> {
        self.fourth = fourth;
        self.fifth = fifth;
        self.sixth = sixth;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.first.is_empty() {
            return Err(MeetError::InvalidResult {
                reason: "first place must name at least one student".into(),
            });
        }
        let mut seen = HashSet::new();
        for id in self.placed_students() {
            if !seen.insert(id) {
                return Err(MeetError::InvalidResult {
                    reason: format!("student {id} is listed in more than one place"),
                });
            }
        }
        Ok(())
    }

    /// Every student id named anywhere in this result.
    fn placed_students(&self) -> impl Iterator<Item = &StudentId> {
        self.first
            .iter()
            .chain(&self.second)
            .chain(&self.third)
            .chain(&self.fourth)
            .chain(&self.fifth)
            .chain(&self.sixth)
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// The three scoring place sets, gold to bronze.
    pub fn podium(&self) -> [&[StudentId]; 3] {
        [&self.first, &self.second, &self.third]
    }

    pub fn first(&self) -> &[StudentId] {
        &self.first
    }

    pub fn second(&self) -> &[StudentId] {
        &self.second
    }

    pub fn third(&self) -> &[StudentId] {
        &self.third
    }

    pub fn fourth(&self) -> Option<&StudentId> {
        self.fourth.as_ref()
    }

    pub fn fifth(&self) -> Option<&StudentId> {
        self.fifth.as_ref()
    }

    pub fn sixth(&self) -> Option<&StudentId> {
        self.sixth.as_ref()
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }
}
