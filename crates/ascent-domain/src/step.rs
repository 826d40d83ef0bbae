//! Block steps and their nested unions (rep scheme, intensity).

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::wire::{BlockStepWire, IntensityWire, RepSpecWire};

closed_enum!(
    /// Discriminant of [`BlockStep`].
    BlockStepKind, field = "kind", {
        ExercisePrescription => "exercise_prescription",
        Rest => "rest",
        Warmup => "warmup",
        Cooldown => "cooldown",
    }
);

closed_enum!(
    /// Discriminant of [`RepSpec`].
    RepKind, field = "kind", {
        Reps => "reps",
        Time => "time",
        Distance => "distance",
    }
);

closed_enum!(
    /// Discriminant of [`Intensity`].
    IntensityMode, field = "mode", {
        Rpe => "rpe",
        Percentage => "percentage",
        Weight => "weight",
    }
);

/// One item inside a [`Block`](crate::plan::Block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BlockStepWire", into = "BlockStepWire")]
pub enum BlockStep {
    ExercisePrescription(ExercisePrescription),
    Rest(RestStep),
    Warmup(WarmupStep),
    Cooldown(CooldownStep),
}

impl BlockStep {
    pub fn kind(&self) -> BlockStepKind {
        match self {
            Self::ExercisePrescription(_) => BlockStepKind::ExercisePrescription,
            Self::Rest(_) => BlockStepKind::Rest,
            Self::Warmup(_) => BlockStepKind::Warmup,
            Self::Cooldown(_) => BlockStepKind::Cooldown,
        }
    }

    pub(crate) fn check(&self) -> Result<(), PlanError> {
        match self {
            Self::ExercisePrescription(p) => p.intensity.check(),
            Self::Rest(_) | Self::Warmup(_) | Self::Cooldown(_) => Ok(()),
        }
    }
}

/// An exercise with its rep scheme and load. The name is free text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePrescription {
    pub exercise_name: String,
    pub rep_spec: RepSpec,
    pub intensity: Intensity,
}

/// How much of an exercise to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RepSpecWire", into = "RepSpecWire")]
pub enum RepSpec {
    Reps(u32),
    /// Seconds under work.
    Time(u32),
    /// Free-form distance such as `"400m"` or `"2 mi"`.
    Distance(String),
}

impl RepSpec {
    pub fn kind(&self) -> RepKind {
        match self {
            Self::Reps(_) => RepKind::Reps,
            Self::Time(_) => RepKind::Time,
            Self::Distance(_) => RepKind::Distance,
        }
    }
}

/// How hard to work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntensityWire", into = "IntensityWire")]
pub enum Intensity {
    /// Rate of perceived exertion, usually 1-10.
    Rpe(f64),
    /// Percentage of a one-rep max.
    Percentage(f64),
    /// Absolute load.
    Weight(f64),
}

impl Intensity {
    pub fn mode(&self) -> IntensityMode {
        match self {
            Self::Rpe(_) => IntensityMode::Rpe,
            Self::Percentage(_) => IntensityMode::Percentage,
            Self::Weight(_) => IntensityMode::Weight,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Self::Rpe(v) | Self::Percentage(v) | Self::Weight(v) => v,
        }
    }

    pub(crate) fn check(&self) -> Result<(), PlanError> {
        let field = match self.mode() {
            IntensityMode::Rpe => "rpe",
            IntensityMode::Percentage => "percentage",
            IntensityMode::Weight => "weight",
        };
        finite_non_negative(field, self.value()).map(|_| ())
    }
}

pub(crate) fn finite_non_negative(field: &'static str, value: f64) -> Result<f64, PlanError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PlanError::InvalidNumber { field })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestStep {
    pub duration_sec: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmupStep {
    pub description: String,
    pub duration_sec: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooldownStep {
    pub description: String,
    pub duration_sec: u32,
}
