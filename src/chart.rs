//! Checkpoint tables and the split calculator.
//!
//! The checkpoint tables are static data; splits are derived fresh on every
//! call from (target seconds, unit) and never cached or mutated.

use clap::ValueEnum;
use serde::Serialize;

use crate::format::format_time;

pub const MARATHON_DISTANCE_KM: f64 = 42.195;
pub const MARATHON_DISTANCE_MI: f64 = 26.2188;

/// Slider bounds of the reference configuration (2 to 7 hours).
pub const MIN_MINUTES: f64 = 120.0;
pub const MAX_MINUTES: f64 = 420.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Km,
    Mi,
}

impl Unit {
    pub fn marathon_distance(self) -> f64 {
        match self {
            Unit::Km => MARATHON_DISTANCE_KM,
            Unit::Mi => MARATHON_DISTANCE_MI,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Km => "km",
            Unit::Mi => "mi",
        }
    }

    pub fn parse(s: &str) -> Option<Unit> {
        match s {
            "km" => Some(Unit::Km),
            "mi" => Some(Unit::Mi),
            _ => None,
        }
    }
}

/// Semantic checkpoint identity, resolved to display text by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tag {
    Half,
    Finish,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Label {
    Fixed(&'static str),
    Tag(Tag),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Checkpoint {
    pub distance: f64,
    pub label: Label,
}

pub const CHECKPOINTS_KM: &[Checkpoint] = &[
    Checkpoint { distance: 5.0, label: Label::Fixed("5 km") },
    Checkpoint { distance: 10.0, label: Label::Fixed("10 km") },
    Checkpoint { distance: 15.0, label: Label::Fixed("15 km") },
    Checkpoint { distance: 20.0, label: Label::Fixed("20 km") },
    Checkpoint { distance: 21.0975, label: Label::Tag(Tag::Half) },
    Checkpoint { distance: 25.0, label: Label::Fixed("25 km") },
    Checkpoint { distance: 30.0, label: Label::Fixed("30 km") },
    Checkpoint { distance: 35.0, label: Label::Fixed("35 km") },
    Checkpoint { distance: 40.0, label: Label::Fixed("40 km") },
    Checkpoint { distance: 42.195, label: Label::Tag(Tag::Finish) },
];

pub const CHECKPOINTS_MI: &[Checkpoint] = &[
    Checkpoint { distance: 5.0, label: Label::Fixed("5 mi") },
    Checkpoint { distance: 10.0, label: Label::Fixed("10 mi") },
    Checkpoint { distance: 13.1, label: Label::Tag(Tag::Half) },
    Checkpoint { distance: 15.0, label: Label::Fixed("15 mi") },
    Checkpoint { distance: 20.0, label: Label::Fixed("20 mi") },
    Checkpoint { distance: 26.2, label: Label::Tag(Tag::Finish) },
];

pub fn checkpoints(unit: Unit) -> &'static [Checkpoint] {
    match unit {
        Unit::Km => CHECKPOINTS_KM,
        Unit::Mi => CHECKPOINTS_MI,
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Preset {
    pub label: &'static str,
    pub minutes: f64,
}

pub const PRESETS: &[Preset] = &[
    Preset { label: "2:30", minutes: 150.0 },
    Preset { label: "2:50", minutes: 170.0 },
    Preset { label: "3:00", minutes: 180.0 },
    Preset { label: "3:30", minutes: 210.0 },
    Preset { label: "4:00", minutes: 240.0 },
    Preset { label: "4:30", minutes: 270.0 },
    Preset { label: "5:00", minutes: 300.0 },
    Preset { label: "6:00", minutes: 360.0 },
];

/// One row of the pace chart. Derived output only, recomputed per render.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Split {
    pub label: String,
    pub is_half: bool,
    pub is_finish: bool,
    pub time: String,
}

/// Derive the split chart for a target time, assuming perfectly even pacing.
///
/// `resolve` turns the semantic tags (half, finish) into display text; fixed
/// distance labels pass through untouched. The output always has the same
/// length and order as the unit's checkpoint table. Bad input is not an
/// error: a negative or NaN target yields sentinel times in every row.
pub fn compute_splits<F>(total_seconds: f64, unit: Unit, resolve: F) -> Vec<Split>
where
    F: Fn(Tag) -> String,
{
    let full_distance = unit.marathon_distance();
    checkpoints(unit)
        .iter()
        .map(|cp| {
            let (label, tag) = match cp.label {
                Label::Fixed(text) => (text.to_string(), None),
                Label::Tag(tag) => (resolve(tag), Some(tag)),
            };
            Split {
                label,
                is_half: tag == Some(Tag::Half),
                is_finish: tag == Some(Tag::Finish),
                time: format_time((cp.distance / full_distance) * total_seconds),
            }
        })
        .collect()
}

/// Seconds needed per km (or mile) to finish in `total_seconds`.
pub fn pace_seconds(total_seconds: f64, unit: Unit) -> f64 {
    total_seconds / unit.marathon_distance()
}
