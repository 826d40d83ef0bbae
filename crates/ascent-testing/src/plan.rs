//! Sample plans for tests.

use ascent_domain::{
    Block, BlockStep, BlockType, CooldownStep, ExercisePrescription, Goal, Intensity, Plan,
    PlanId, PlannedDay, PlannedWeek, RepSpec, RestStep, Session, SessionId, UserId, WarmupStep,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Monday 2025-01-06T00:00:00Z.
pub fn monday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0)
        .single()
        .expect("valid date")
}

/// A session exercising every step kind, rep kind, and intensity mode.
pub fn sample_session(id: &str) -> Session {
    Session {
        id: SessionId::new(id),
        title: "Upper Body Strength".into(),
        blocks: vec![
            Block {
                label: Some("Warm-up".into()),
                block_type: BlockType::Warmup,
                rounds: 1,
                rest_sec_between_rounds: 0,
                items: vec![BlockStep::Warmup(WarmupStep {
                    description: "Arm circles and band pull-aparts".into(),
                    duration_sec: 300,
                })],
            },
            Block {
                label: Some("Main".into()),
                block_type: BlockType::Strength,
                rounds: 3,
                rest_sec_between_rounds: 90,
                items: vec![
                    BlockStep::ExercisePrescription(ExercisePrescription {
                        exercise_name: "Push-ups".into(),
                        rep_spec: RepSpec::Reps(10),
                        intensity: Intensity::Rpe(7.0),
                    }),
                    BlockStep::ExercisePrescription(ExercisePrescription {
                        exercise_name: "Plank".into(),
                        rep_spec: RepSpec::Time(45),
                        intensity: Intensity::Percentage(60.0),
                    }),
                    BlockStep::ExercisePrescription(ExercisePrescription {
                        exercise_name: "Farmer Carry".into(),
                        rep_spec: RepSpec::Distance("40m".into()),
                        intensity: Intensity::Weight(24.0),
                    }),
                    BlockStep::Rest(RestStep { duration_sec: 60 }),
                ],
            },
            Block {
                label: None,
                block_type: BlockType::Cooldown,
                rounds: 1,
                rest_sec_between_rounds: 0,
                items: vec![BlockStep::Cooldown(CooldownStep {
                    description: "Easy walk".into(),
                    duration_sec: 180,
                })],
            },
        ],
    }
}

/// One-week plan owned by `user_id`, training Monday and Thursday on the same session.
pub fn sample_plan(plan_id: &str, user_id: &str) -> Plan {
    let start = monday();
    let days = (0..7)
        .map(|offset| PlannedDay {
            date: start + Duration::days(offset),
            session_id: matches!(offset, 0 | 3).then(|| SessionId::new("upper-a")),
        })
        .collect();
    Plan {
        id: PlanId::new(plan_id),
        user_id: UserId::new(user_id),
        goal: Goal::GetStronger,
        start_date: start,
        notes_coach: Some("Keep two reps in reserve.".into()),
        weeks: vec![PlannedWeek {
            week_number: 1,
            start_date: start,
            days,
        }],
        sessions: vec![sample_session("upper-a")],
    }
}
