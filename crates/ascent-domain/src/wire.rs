//! External JSON shape of the plan model.
//!
//! Every union travels as a plain string discriminant (`kind`, `mode`, `type`)
//! plus one flat optional sibling field per possible payload. Exactly the
//! sibling named by the discriminant must be present. Absent optionals are
//! omitted on encode rather than written as `null`. Unknown extra fields are
//! ignored on decode.
//!
//! The domain types serialize through these structs, so HTTP bodies and stored
//! session documents share one contract. Decoding a `*Wire` value first and
//! converting with `TryFrom` keeps the [`PlanError`] intact; deserializing a
//! domain type directly folds it into the deserializer's error message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::id::{PlanId, SessionId, UserId};
use crate::plan::{Block, BlockType, Goal, Plan, PlannedDay, PlannedWeek, Session};
use crate::step::{
    BlockStep, BlockStepKind, CooldownStep, ExercisePrescription, Intensity, IntensityMode,
    RepKind, RepSpec, RestStep, WarmupStep, finite_non_negative,
};

// ── Wire structs ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWire {
    /// Optional on input so a client can let the server assign one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    pub user_id: String,
    pub goal: String,
    #[serde(with = "crate::timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_coach: Option<String>,
    #[serde(default)]
    pub weeks: Vec<PlannedWeekWire>,
    #[serde(default)]
    pub sessions: Vec<SessionWire>,
}

impl PlanWire {
    /// Fill in a freshly generated `plan_id` when the payload has none.
    pub fn with_generated_id(mut self) -> Self {
        if self.plan_id.is_none() {
            self.plan_id = Some(PlanId::generate().into_inner());
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedWeekWire {
    pub week_number: i64,
    #[serde(with = "crate::timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub days: Vec<PlannedDayWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedDayWire {
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionWire {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<BlockWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default = "default_rounds")]
    pub rounds: i64,
    #[serde(default)]
    pub rest_sec_between_rounds: i64,
    #[serde(default)]
    pub items: Vec<BlockStepWire>,
}

fn default_rounds() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStepWire {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_prescription: Option<ExercisePrescriptionWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_step: Option<RestStepWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_step: Option<WarmupStepWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown_step: Option<CooldownStepWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisePrescriptionWire {
    pub exercise_name: String,
    pub rep_spec: RepSpecWire,
    pub intensity: IntensityWire,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepSpecWire {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_sec: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityWire {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestStepWire {
    pub duration_sec: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmupStepWire {
    pub description: String,
    pub duration_sec: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooldownStepWire {
    pub description: String,
    pub duration_sec: i64,
}

// ── Checks ───────────────────────────────────────────────────────────────────

/// Payload presence for one union value: which sibling fields are set.
struct Union<'a> {
    tag: &'static str,
    value: &'static str,
    present: &'a [(&'static str, bool)],
}

impl Union<'_> {
    /// Take the payload named by the discriminant. Any other populated sibling
    /// is reported first, then a missing selected payload.
    fn take<T>(&self, field: &'static str, payload: Option<T>) -> Result<T, PlanError> {
        if let Some(&(other, _)) = self
            .present
            .iter()
            .find(|&&(name, is_set)| is_set && name != field)
        {
            return Err(PlanError::UnexpectedPayload {
                tag: self.tag,
                value: self.value,
                field: other,
            });
        }
        payload.ok_or(PlanError::MissingPayload {
            tag: self.tag,
            value: self.value,
            field,
        })
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u32, PlanError> {
    if value < 0 {
        return Err(PlanError::Negative { field, value });
    }
    u32::try_from(value).map_err(|_| PlanError::OutOfRange { field, value })
}

fn positive(field: &'static str, value: i64) -> Result<u32, PlanError> {
    match non_negative(field, value)? {
        0 => Err(PlanError::NotPositive { field, value }),
        n => Ok(n),
    }
}

// ── Decode (wire → domain) ───────────────────────────────────────────────────

impl TryFrom<PlanWire> for Plan {
    type Error = PlanError;

    fn try_from(w: PlanWire) -> Result<Self, Self::Error> {
        let plan = Plan {
            id: PlanId::from(w.plan_id.ok_or(PlanError::MissingField("plan_id"))?),
            user_id: UserId::from(w.user_id),
            goal: w.goal.parse::<Goal>()?,
            start_date: w.start_date,
            notes_coach: w.notes_coach,
            weeks: w
                .weeks
                .into_iter()
                .map(PlannedWeek::try_from)
                .collect::<Result<_, _>>()?,
            sessions: w
                .sessions
                .into_iter()
                .map(Session::try_from)
                .collect::<Result<_, _>>()?,
        };
        plan.validate()?;
        Ok(plan)
    }
}

impl TryFrom<PlannedWeekWire> for PlannedWeek {
    type Error = PlanError;

    fn try_from(w: PlannedWeekWire) -> Result<Self, Self::Error> {
        Ok(PlannedWeek {
            week_number: positive("week_number", w.week_number)?,
            start_date: w.start_date,
            days: w
                .days
                .into_iter()
                .map(|d| PlannedDay {
                    date: d.date,
                    session_id: d.session_id.map(SessionId::from),
                })
                .collect(),
        })
    }
}

impl TryFrom<SessionWire> for Session {
    type Error = PlanError;

    fn try_from(w: SessionWire) -> Result<Self, Self::Error> {
        Ok(Session {
            id: SessionId::from(w.id),
            title: w.title,
            blocks: w
                .blocks
                .into_iter()
                .map(Block::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<BlockWire> for Block {
    type Error = PlanError;

    fn try_from(w: BlockWire) -> Result<Self, Self::Error> {
        Ok(Block {
            label: w.label,
            block_type: w.block_type.parse::<BlockType>()?,
            rounds: positive("rounds", w.rounds)?,
            rest_sec_between_rounds: non_negative(
                "rest_sec_between_rounds",
                w.rest_sec_between_rounds,
            )?,
            items: w
                .items
                .into_iter()
                .map(BlockStep::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<BlockStepWire> for BlockStep {
    type Error = PlanError;

    fn try_from(w: BlockStepWire) -> Result<Self, Self::Error> {
        let kind = w.kind.parse::<BlockStepKind>()?;
        let present = [
            ("exercise_prescription", w.exercise_prescription.is_some()),
            ("rest_step", w.rest_step.is_some()),
            ("warmup_step", w.warmup_step.is_some()),
            ("cooldown_step", w.cooldown_step.is_some()),
        ];
        let union = Union {
            tag: "kind",
            value: kind.as_str(),
            present: &present,
        };
        Ok(match kind {
            BlockStepKind::ExercisePrescription => {
                let p = union.take("exercise_prescription", w.exercise_prescription)?;
                BlockStep::ExercisePrescription(ExercisePrescription {
                    exercise_name: p.exercise_name,
                    rep_spec: RepSpec::try_from(p.rep_spec)?,
                    intensity: Intensity::try_from(p.intensity)?,
                })
            }
            BlockStepKind::Rest => {
                let p = union.take("rest_step", w.rest_step)?;
                BlockStep::Rest(RestStep {
                    duration_sec: non_negative("duration_sec", p.duration_sec)?,
                })
            }
            BlockStepKind::Warmup => {
                let p = union.take("warmup_step", w.warmup_step)?;
                BlockStep::Warmup(WarmupStep {
                    description: p.description,
                    duration_sec: non_negative("duration_sec", p.duration_sec)?,
                })
            }
            BlockStepKind::Cooldown => {
                let p = union.take("cooldown_step", w.cooldown_step)?;
                BlockStep::Cooldown(CooldownStep {
                    description: p.description,
                    duration_sec: non_negative("duration_sec", p.duration_sec)?,
                })
            }
        })
    }
}

impl TryFrom<RepSpecWire> for RepSpec {
    type Error = PlanError;

    fn try_from(w: RepSpecWire) -> Result<Self, Self::Error> {
        let kind = w.kind.parse::<RepKind>()?;
        let present = [
            ("reps", w.reps.is_some()),
            ("time_sec", w.time_sec.is_some()),
            ("distance", w.distance.is_some()),
        ];
        let union = Union {
            tag: "kind",
            value: kind.as_str(),
            present: &present,
        };
        Ok(match kind {
            RepKind::Reps => RepSpec::Reps(non_negative("reps", union.take("reps", w.reps)?)?),
            RepKind::Time => RepSpec::Time(non_negative(
                "time_sec",
                union.take("time_sec", w.time_sec)?,
            )?),
            RepKind::Distance => RepSpec::Distance(union.take("distance", w.distance)?),
        })
    }
}

impl TryFrom<IntensityWire> for Intensity {
    type Error = PlanError;

    fn try_from(w: IntensityWire) -> Result<Self, Self::Error> {
        let mode = w.mode.parse::<IntensityMode>()?;
        let present = [
            ("rpe", w.rpe.is_some()),
            ("percentage", w.percentage.is_some()),
            ("weight", w.weight.is_some()),
        ];
        let union = Union {
            tag: "mode",
            value: mode.as_str(),
            present: &present,
        };
        Ok(match mode {
            IntensityMode::Rpe => {
                Intensity::Rpe(finite_non_negative("rpe", union.take("rpe", w.rpe)?)?)
            }
            IntensityMode::Percentage => Intensity::Percentage(finite_non_negative(
                "percentage",
                union.take("percentage", w.percentage)?,
            )?),
            IntensityMode::Weight => {
                Intensity::Weight(finite_non_negative("weight", union.take("weight", w.weight)?)?)
            }
        })
    }
}

// ── Encode (domain → wire) ───────────────────────────────────────────────────

impl From<Plan> for PlanWire {
    fn from(plan: Plan) -> Self {
        PlanWire {
            plan_id: Some(plan.id.into_inner()),
            user_id: plan.user_id.into_inner(),
            goal: plan.goal.to_string(),
            start_date: plan.start_date,
            notes_coach: plan.notes_coach,
            weeks: plan.weeks.into_iter().map(Into::into).collect(),
            sessions: plan.sessions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PlannedWeek> for PlannedWeekWire {
    fn from(week: PlannedWeek) -> Self {
        PlannedWeekWire {
            week_number: i64::from(week.week_number),
            start_date: week.start_date,
            days: week
                .days
                .into_iter()
                .map(|d| PlannedDayWire {
                    date: d.date,
                    session_id: d.session_id.map(SessionId::into_inner),
                })
                .collect(),
        }
    }
}

impl From<Session> for SessionWire {
    fn from(session: Session) -> Self {
        SessionWire {
            id: session.id.into_inner(),
            title: session.title,
            blocks: session.blocks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Block> for BlockWire {
    fn from(block: Block) -> Self {
        BlockWire {
            label: block.label,
            block_type: block.block_type.to_string(),
            rounds: i64::from(block.rounds),
            rest_sec_between_rounds: i64::from(block.rest_sec_between_rounds),
            items: block.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<BlockStep> for BlockStepWire {
    fn from(step: BlockStep) -> Self {
        let mut w = BlockStepWire {
            kind: step.kind().to_string(),
            exercise_prescription: None,
            rest_step: None,
            warmup_step: None,
            cooldown_step: None,
        };
        match step {
            BlockStep::ExercisePrescription(p) => {
                w.exercise_prescription = Some(ExercisePrescriptionWire {
                    exercise_name: p.exercise_name,
                    rep_spec: p.rep_spec.into(),
                    intensity: p.intensity.into(),
                });
            }
            BlockStep::Rest(r) => {
                w.rest_step = Some(RestStepWire {
                    duration_sec: i64::from(r.duration_sec),
                });
            }
            BlockStep::Warmup(s) => {
                w.warmup_step = Some(WarmupStepWire {
                    description: s.description,
                    duration_sec: i64::from(s.duration_sec),
                });
            }
            BlockStep::Cooldown(s) => {
                w.cooldown_step = Some(CooldownStepWire {
                    description: s.description,
                    duration_sec: i64::from(s.duration_sec),
                });
            }
        }
        w
    }
}

impl From<RepSpec> for RepSpecWire {
    fn from(spec: RepSpec) -> Self {
        let mut w = RepSpecWire {
            kind: spec.kind().to_string(),
            reps: None,
            time_sec: None,
            distance: None,
        };
        match spec {
            RepSpec::Reps(n) => w.reps = Some(i64::from(n)),
            RepSpec::Time(secs) => w.time_sec = Some(i64::from(secs)),
            RepSpec::Distance(d) => w.distance = Some(d),
        }
        w
    }
}

impl From<Intensity> for IntensityWire {
    fn from(intensity: Intensity) -> Self {
        let mut w = IntensityWire {
            mode: intensity.mode().to_string(),
            rpe: None,
            percentage: None,
            weight: None,
        };
        match intensity {
            Intensity::Rpe(v) => w.rpe = Some(v),
            Intensity::Percentage(v) => w.percentage = Some(v),
            Intensity::Weight(v) => w.weight = Some(v),
        }
        w
    }
}
