use std::collections::BTreeMap;

use itertools::Itertools;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

use crate::model::{House, HouseStanding, ScoreDelta, Standings, TimelineEntry, TimelineKind};
use crate::scoring::score_event;
use crate::snapshot::MeetSnapshot;

/// Fold every placement result and bonus award into ranked house standings
/// and the cumulative score timeline.
///
/// The fold is deterministic and order-independent: permuting the stored
/// results or awards changes nothing, and the timeline is ordered by event
/// schedule (unscheduled events sort earliest), not by input order. Results
/// whose event no longer resolves are skipped. Empty inputs produce a table
/// of all-zero standings, never an error.
#[instrument(skip(snapshot))]
pub fn compute_standings(snapshot: &MeetSnapshot) -> Standings {
    let mut totals: BTreeMap<House, ScoreDelta> =
        House::iter().map(|h| (h, ScoreDelta::default())).collect();
    let mut scored = Vec::new();

    for result in &snapshot.results {
        let Some(event) = snapshot.event(result.event_id()) else {
            warn!(event = %result.event_id(), "result references a deleted event");
            continue;
        };
        let deltas = score_event(event, result, &snapshot.students);
        for (house, delta) in &deltas {
            *totals.get_mut(house).expect("every house is seeded") += *delta;
        }
        scored.push((event, deltas));
    }

    let mut bonus_points: BTreeMap<House, i32> = House::iter().map(|h| (h, 0)).collect();
    for award in &snapshot.bonus_awards {
        *bonus_points.get_mut(&award.house()).expect("every house is seeded") +=
            award.points();
    }

    let mut table: Vec<HouseStanding> = House::iter()
        .map(|house| {
            let delta = totals[&house];
            let bonus = bonus_points[&house];
            HouseStanding {
                house,
                gold: delta.gold,
                silver: delta.silver,
                bronze: delta.bronze,
                bonus_points: bonus,
                total: delta.points + bonus,
            }
        })
        .collect();
    table.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(b.gold.cmp(&a.gold))
            .then(b.silver.cmp(&a.silver))
            .then(b.bronze.cmp(&a.bronze))
            .then(a.house.cmp(&b.house))
    });

    let timeline = build_timeline(snapshot, scored);
    debug!(
        events = timeline.len().saturating_sub(1),
        leader = %table[0].house,
        "standings computed"
    );

    Standings { table, timeline }
}

/// Running-total snapshots: a zero start entry, one entry per scored event
/// in schedule order, and one trailing entry for all bonus awards combined
/// (the awards carry no schedule of their own).
fn build_timeline(
    snapshot: &MeetSnapshot,
    scored: Vec<(&crate::model::Event, BTreeMap<House, ScoreDelta>)>,
) -> Vec<TimelineEntry> {
    let mut running: BTreeMap<House, i32> = House::iter().map(|h| (h, 0)).collect();
    let mut timeline = vec![TimelineEntry {
        label: "Start".into(),
        kind: TimelineKind::Start,
        schedule: None,
        totals: running.clone(),
    }];

    for (event, deltas) in scored
        .into_iter()
        .sorted_by_key(|(event, _)| (event.schedule, event.id.clone()))
    {
        for (house, delta) in deltas {
            *running.get_mut(&house).expect("every house is seeded") += delta.points;
        }
        timeline.push(TimelineEntry {
            label: event.name.clone(),
            kind: TimelineKind::Event,
            schedule: event.schedule,
            totals: running.clone(),
        });
    }

    if !snapshot.bonus_awards.is_empty() {
        for award in &snapshot.bonus_awards {
            *running.get_mut(&award.house()).expect("every house is seeded") +=
                award.points();
        }
        timeline.push(TimelineEntry {
            label: "Bonus points awarded".into(),
            kind: TimelineKind::Bonus,
            schedule: None,
            totals: running,
        });
    }

    timeline
}
