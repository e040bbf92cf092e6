use serde::Serialize;

use crate::error::{MeetError, Result};

use super::house::House;
use super::student::StudentId;

/// Bonus points are bounded to keep manual awards from dwarfing event scores.
pub const BONUS_POINTS_MIN: i32 = 1;
pub const BONUS_POINTS_MAX: i32 = 10;

/// A manually granted point award to a house, for march pasts, decor and the
/// like — not derived from any event placement.
///
/// The optional student attribution is display-only: the points always
/// accrue to the named house regardless of who earned them.
#[derive(Debug, Clone, Serialize)]
pub struct BonusAward {
    house: House,
    student_id: Option<StudentId>,
    points: i32,
    description: String,
}

impl BonusAward {
    pub fn new(
        house: House,
        student_id: Option<StudentId>,
        points: i32,
        description: impl Into<String>,
    ) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(MeetError::InvalidBonusAward {
                reason: "description must not be empty".into(),
            });
        }
        if !(BONUS_POINTS_MIN..=BONUS_POINTS_MAX).contains(&points) {
            return Err(MeetError::InvalidBonusAward {
                reason: format!(
                    "points must be between {BONUS_POINTS_MIN} and {BONUS_POINTS_MAX}, got {points}"
                ),
            });
        }
        Ok(Self {
            house,
            student_id,
            points,
            description,
        })
    }

    pub fn house(&self) -> House {
        self.house
    }

    pub fn student_id(&self) -> Option<&StudentId> {
        self.student_id.as_ref()
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
