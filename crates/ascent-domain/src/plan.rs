//! The plan aggregate: a plan owns its weeks and sessions; planned days point at
//! sessions by id.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::id::{PlanId, SessionId, UserId};
use crate::step::BlockStep;
use crate::wire::{BlockWire, PlanWire, PlannedWeekWire, SessionWire};

closed_enum!(
    /// Training goal a plan is built around.
    Goal, field = "goal", {
        GetStronger => "get_stronger",
        LoseFat => "lose_fat",
        GeneralStrengthFitness => "general_strength_fitness",
        BuildMuscle => "build_muscle",
        Endurance => "endurance",
        MobilityHealth => "mobility_health",
    }
);

closed_enum!(
    /// Descriptive category of a block. Not checked against the block's steps.
    BlockType, field = "type", {
        Warmup => "warmup",
        Strength => "strength",
        Cooldown => "cooldown",
        Cardio => "cardio",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlanWire", into = "PlanWire")]
pub struct Plan {
    pub id: PlanId,
    pub user_id: UserId,
    pub goal: Goal,
    pub start_date: DateTime<Utc>,
    pub notes_coach: Option<String>,
    pub weeks: Vec<PlannedWeek>,
    pub sessions: Vec<Session>,
}

/// A calendar week of the plan. `week_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlannedWeekWire", into = "PlannedWeekWire")]
pub struct PlannedWeek {
    pub week_number: u32,
    pub start_date: DateTime<Utc>,
    pub days: Vec<PlannedDay>,
}

/// One day of a week. No session means a rest day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDay {
    pub date: DateTime<Utc>,
    pub session_id: Option<SessionId>,
}

impl PlannedDay {
    pub fn is_rest_day(&self) -> bool {
        self.session_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionWire", into = "SessionWire")]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// A group of steps repeated `rounds` times with a rest between rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BlockWire", into = "BlockWire")]
pub struct Block {
    pub label: Option<String>,
    pub block_type: BlockType,
    pub rounds: u32,
    /// Only meaningful when `rounds > 1`.
    pub rest_sec_between_rounds: u32,
    pub items: Vec<BlockStep>,
}

impl Block {
    pub(crate) fn check(&self) -> Result<(), PlanError> {
        if self.rounds == 0 {
            return Err(PlanError::NotPositive {
                field: "rounds",
                value: 0,
            });
        }
        self.items.iter().try_for_each(BlockStep::check)
    }
}

/// Lookup from session id to session, built over one plan's sessions.
///
/// Planned days hold only an id; resolve them through this index instead of
/// keeping references between parts of the aggregate.
#[derive(Debug)]
pub struct SessionIndex<'a> {
    by_id: HashMap<&'a SessionId, &'a Session>,
}

impl<'a> SessionIndex<'a> {
    /// Fails if two sessions share an id.
    pub fn build(sessions: &'a [Session]) -> Result<Self, PlanError> {
        let mut by_id = HashMap::with_capacity(sessions.len());
        for session in sessions {
            if by_id.insert(&session.id, session).is_some() {
                return Err(PlanError::DuplicateSession(session.id.to_string()));
            }
        }
        Ok(Self { by_id })
    }

    pub fn get(&self, id: &SessionId) -> Option<&'a Session> {
        self.by_id.get(id).copied()
    }

    /// The session scheduled on `day`, `None` for a rest day.
    pub fn resolve(&self, day: &PlannedDay) -> Result<Option<&'a Session>, PlanError> {
        match &day.session_id {
            None => Ok(None),
            Some(id) => self
                .get(id)
                .map(Some)
                .ok_or_else(|| PlanError::UnresolvedSession(id.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Session {
    pub fn validate(&self) -> Result<(), PlanError> {
        self.blocks.iter().try_for_each(Block::check)
    }
}

impl Plan {
    pub fn session_index(&self) -> Result<SessionIndex<'_>, PlanError> {
        SessionIndex::build(&self.sessions)
    }

    /// Every planned day in order, paired with its session (`None` on rest days).
    pub fn schedule(&self) -> Result<Vec<(&PlannedDay, Option<&Session>)>, PlanError> {
        let index = self.session_index()?;
        self.weeks
            .iter()
            .flat_map(|week| &week.days)
            .map(|day| index.resolve(day).map(|session| (day, session)))
            .collect()
    }

    /// Check the aggregate invariants: unique session ids, every planned day
    /// resolves, week numbers and rounds are at least 1, intensities are
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), PlanError> {
        let index = self.session_index()?;
        for week in &self.weeks {
            if week.week_number == 0 {
                return Err(PlanError::NotPositive {
                    field: "week_number",
                    value: 0,
                });
            }
            for day in &week.days {
                index.resolve(day)?;
            }
        }
        self.sessions.iter().try_for_each(Session::validate)
    }
}
