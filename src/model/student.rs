use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::house::House;

pub type StudentId = String;

/// A student's recorded gender, used for event gender-category checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Gender {
    Male,
    Female,
}

/// A student enrolled in the meet.
///
/// House membership is fixed for scoring purposes: scoring always resolves a
/// student's house from the current roster, so an administrative house
/// correction retroactively moves all of that student's historical points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    pub admission_no: String,
    pub grade: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub house: House,
}

impl Student {
    /// Competition age: the age the student turns in the competition year,
    /// computed from birth year alone.
    pub fn competition_age(&self, competition_year: i32) -> i32 {
        competition_year - self.date_of_birth.year()
    }
}
