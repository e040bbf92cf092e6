use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::student::Gender;

pub type EventId = String;

/// The competition category an event belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EventCategory {
    #[strum(serialize = "Major Game")]
    #[serde(rename = "Major Game")]
    MajorGame,
    #[strum(serialize = "Athletic Event")]
    #[serde(rename = "Athletic Event")]
    Athletic,
}

/// Lifecycle status of an event. The transition to `Completed` happens as a
/// side effect of recording a placement result, never as a separate action.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum EventStatus {
    #[default]
    Open,
    Closed,
    Completed,
}

/// The gender category an event admits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum GenderCategory {
    Boys,
    Girls,
    Mixed,
}

impl GenderCategory {
    /// Whether a student of the given gender may enter this category.
    pub fn admits(&self, gender: Gender) -> bool {
        match self {
            GenderCategory::Boys => gender == Gender::Male,
            GenderCategory::Girls => gender == Gender::Female,
            GenderCategory::Mixed => true,
        }
    }
}

/// The age-group label of an event, mapping to a fixed inclusive range of
/// competition ages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum AgeGroup {
    #[strum(serialize = "Under 12")]
    #[serde(rename = "Under 12")]
    Under12,
    #[strum(serialize = "Under 14")]
    #[serde(rename = "Under 14")]
    Under14,
    #[strum(serialize = "Under 15")]
    #[serde(rename = "Under 15")]
    Under15,
    #[strum(serialize = "Under 16")]
    #[serde(rename = "Under 16")]
    Under16,
    #[strum(serialize = "Under 18")]
    #[serde(rename = "Under 18")]
    Under18,
    #[strum(serialize = "Under 20")]
    #[serde(rename = "Under 20")]
    Under20,
    #[strum(serialize = "Over 15")]
    #[serde(rename = "Over 15")]
    Over15,
    Open,
}

impl AgeGroup {
    /// Whether the given competition age falls inside this group.
    pub fn admits(&self, age: i32) -> bool {
        match self {
            AgeGroup::Under12 => (10..=11).contains(&age),
            AgeGroup::Under14 => (12..=13).contains(&age),
            AgeGroup::Under15 => (10..=14).contains(&age),
            AgeGroup::Under16 => (14..=15).contains(&age),
            AgeGroup::Under18 => (16..=17).contains(&age),
            AgeGroup::Under20 => (18..=19).contains(&age),
            AgeGroup::Over15 => age >= 16,
            AgeGroup::Open => true,
        }
    }
}

/// A single competition event with its own eligibility criteria and at most
/// one recorded result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub category: EventCategory,
    pub age_group: AgeGroup,
    pub is_team_event: bool,
    pub gender_category: GenderCategory,
    pub status: EventStatus,
    /// Id of the judge assigned to record this event's result, if any.
    pub judge_id: Option<String>,
    pub schedule: Option<NaiveDateTime>,
}
