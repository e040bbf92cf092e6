use std::collections::BTreeMap;
use std::ops::AddAssign;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::house::House;

/// Point and medal contribution of one scored event to one house.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDelta {
    pub points: i32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl AddAssign for ScoreDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.points += rhs.points;
        self.gold += rhs.gold;
        self.silver += rhs.silver;
        self.bronze += rhs.bronze;
    }
}

/// Aggregate standing of one house: medal counts, bonus subtotal and total
/// points. Derived on demand, never persisted as authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseStanding {
    pub house: House,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    /// Bonus-award points, shown separately from medal-derived points but
    /// included in `total`.
    pub bonus_points: i32,
    pub total: i32,
}

/// What a timeline entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineKind {
    /// The synthetic zero point before any event.
    Start,
    /// A completed, scored event.
    Event,
    /// The synthetic trailing entry carrying all bonus awards.
    Bonus,
}

/// One point on the cumulative score chart: the running totals of every
/// house after the labeled step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub label: String,
    pub kind: TimelineKind,
    pub schedule: Option<NaiveDateTime>,
    pub totals: BTreeMap<House, i32>,
}

/// The full derived scoreboard: ranked house standings plus the
/// chronological running-total timeline.
#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    /// Ranked best first. Ties on total break by gold, silver, bronze
    /// counts, then house name.
    pub table: Vec<HouseStanding>,
    pub timeline: Vec<TimelineEntry>,
}
