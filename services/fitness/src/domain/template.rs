//! Starter plans: a fixed weekly layout of sessions per goal, repeated for
//! every requested week. Stand-in for real plan generation.

use chrono::{DateTime, Duration, Utc};

use ascent_domain::{
    Block, BlockStep, BlockType, CooldownStep, ExercisePrescription, Goal, Intensity, Plan,
    PlanId, PlannedDay, PlannedWeek, RepSpec, RestStep, Session, SessionId, UserId, WarmupStep,
};

pub const MAX_WEEKS: u32 = 12;
const DAYS_PER_WEEK: i64 = 7;

pub const WELCOME_NOTE: &str = "Welcome to your personalized fitness plan!";

/// Build a `weeks`-long plan for `goal` starting at `start_date`.
/// `weeks` is expected in `1..=MAX_WEEKS`; callers check the range.
pub fn starter_plan(
    plan_id: PlanId,
    user_id: UserId,
    goal: Goal,
    start_date: DateTime<Utc>,
    weeks: u32,
) -> Plan {
    let layout = weekly_layout(goal);
    let weeks = (0..weeks)
        .map(|w| {
            let week_start = start_date + Duration::days(i64::from(w) * DAYS_PER_WEEK);
            PlannedWeek {
                week_number: w + 1,
                start_date: week_start,
                days: (0..DAYS_PER_WEEK)
                    .map(|offset| PlannedDay {
                        date: week_start + Duration::days(offset),
                        session_id: layout
                            .iter()
                            .find(|(day, _)| *day == offset)
                            .map(|(_, session)| session.id.clone()),
                    })
                    .collect(),
            }
        })
        .collect();

    let mut sessions: Vec<Session> = Vec::new();
    for (_, session) in layout {
        if !sessions.iter().any(|s| s.id == session.id) {
            sessions.push(session);
        }
    }

    Plan {
        id: plan_id,
        user_id,
        goal,
        start_date,
        notes_coach: Some(WELCOME_NOTE.to_owned()),
        weeks,
        sessions,
    }
}

/// Day offset within the week (0 = first day) and the session trained on it.
fn weekly_layout(goal: Goal) -> Vec<(i64, Session)> {
    match goal {
        Goal::GetStronger => vec![
            (0, upper_strength()),
            (2, lower_strength()),
            (4, upper_strength()),
        ],
        Goal::LoseFat => vec![
            (0, metabolic_circuit()),
            (2, steady_cardio()),
            (4, metabolic_circuit()),
        ],
        Goal::GeneralStrengthFitness => vec![(0, full_body()), (3, steady_cardio())],
        Goal::BuildMuscle => vec![(0, push_day()), (2, pull_day()), (4, lower_strength())],
        Goal::Endurance => vec![(1, intervals()), (3, steady_cardio()), (5, long_run())],
        Goal::MobilityHealth => vec![(0, mobility_flow()), (2, core_balance()), (4, mobility_flow())],
    }
}

// ── Sessions ─────────────────────────────────────────────────────────────────

fn upper_strength() -> Session {
    session(
        "upper-body-strength",
        "Upper Body Strength",
        "Dynamic arm swings",
        strength(
            3,
            90,
            vec![
                exercise("Push-ups", RepSpec::Reps(10), Intensity::Rpe(7.0)),
                exercise("Dumbbell Row", RepSpec::Reps(8), Intensity::Rpe(8.0)),
                exercise("Overhead Press", RepSpec::Reps(6), Intensity::Percentage(75.0)),
            ],
        ),
    )
}

fn lower_strength() -> Session {
    session(
        "lower-body-strength",
        "Lower Body Strength",
        "Leg swings and bodyweight squats",
        strength(
            3,
            120,
            vec![
                exercise("Goblet Squat", RepSpec::Reps(8), Intensity::Rpe(8.0)),
                exercise("Romanian Deadlift", RepSpec::Reps(8), Intensity::Percentage(70.0)),
                exercise("Walking Lunge", RepSpec::Reps(12), Intensity::Rpe(7.0)),
            ],
        ),
    )
}

fn push_day() -> Session {
    session(
        "push",
        "Push",
        "Band pull-aparts and scapular push-ups",
        strength(
            4,
            90,
            vec![
                exercise("Bench Press", RepSpec::Reps(10), Intensity::Percentage(70.0)),
                exercise("Incline Dumbbell Press", RepSpec::Reps(12), Intensity::Rpe(8.0)),
                exercise("Triceps Dip", RepSpec::Reps(12), Intensity::Rpe(8.0)),
            ],
        ),
    )
}

fn pull_day() -> Session {
    session(
        "pull",
        "Pull",
        "Dead hangs and band rows",
        strength(
            4,
            90,
            vec![
                exercise("Lat Pulldown", RepSpec::Reps(10), Intensity::Rpe(8.0)),
                exercise("Seated Cable Row", RepSpec::Reps(12), Intensity::Rpe(8.0)),
                exercise("Biceps Curl", RepSpec::Reps(12), Intensity::Weight(10.0)),
            ],
        ),
    )
}

fn full_body() -> Session {
    session(
        "full-body",
        "Full Body Strength",
        "Jumping jacks and hip circles",
        strength(
            3,
            90,
            vec![
                exercise("Goblet Squat", RepSpec::Reps(10), Intensity::Rpe(7.0)),
                exercise("Push-ups", RepSpec::Reps(10), Intensity::Rpe(7.0)),
                exercise("Plank", RepSpec::Time(45), Intensity::Rpe(6.0)),
            ],
        ),
    )
}

fn metabolic_circuit() -> Session {
    session(
        "metabolic-circuit",
        "Metabolic Circuit",
        "Marching in place and arm circles",
        Block {
            label: Some("Circuit".into()),
            block_type: BlockType::Cardio,
            rounds: 4,
            rest_sec_between_rounds: 60,
            items: vec![
                exercise("Jumping Jacks", RepSpec::Time(40), Intensity::Rpe(7.0)),
                exercise("Bodyweight Squat", RepSpec::Reps(15), Intensity::Rpe(7.0)),
                exercise("Mountain Climbers", RepSpec::Time(30), Intensity::Rpe(8.0)),
                BlockStep::Rest(RestStep { duration_sec: 20 }),
            ],
        },
    )
}

fn steady_cardio() -> Session {
    session(
        "steady-cardio",
        "Steady Cardio",
        "Easy walk",
        Block {
            label: Some("Zone 2".into()),
            block_type: BlockType::Cardio,
            rounds: 1,
            rest_sec_between_rounds: 0,
            items: vec![exercise(
                "Brisk Walk or Easy Jog",
                RepSpec::Time(1800),
                Intensity::Percentage(65.0),
            )],
        },
    )
}

fn intervals() -> Session {
    session(
        "intervals",
        "Intervals",
        "Easy jog and strides",
        Block {
            label: Some("Repeats".into()),
            block_type: BlockType::Cardio,
            rounds: 6,
            rest_sec_between_rounds: 90,
            items: vec![exercise("Run", RepSpec::Distance("400m".into()), Intensity::Rpe(8.0))],
        },
    )
}

fn long_run() -> Session {
    session(
        "long-run",
        "Long Run",
        "Walk then easy jog",
        Block {
            label: None,
            block_type: BlockType::Cardio,
            rounds: 1,
            rest_sec_between_rounds: 0,
            items: vec![exercise("Run", RepSpec::Distance("8 km".into()), Intensity::Rpe(5.0))],
        },
    )
}

fn mobility_flow() -> Session {
    session(
        "mobility-flow",
        "Mobility Flow",
        "Cat-cow and thoracic rotations",
        Block {
            label: Some("Flow".into()),
            block_type: BlockType::Strength,
            rounds: 2,
            rest_sec_between_rounds: 30,
            items: vec![
                exercise("World's Greatest Stretch", RepSpec::Reps(5), Intensity::Rpe(3.0)),
                exercise("Deep Squat Hold", RepSpec::Time(60), Intensity::Rpe(3.0)),
                exercise("Hip Airplane", RepSpec::Reps(6), Intensity::Rpe(4.0)),
            ],
        },
    )
}

fn core_balance() -> Session {
    session(
        "core-balance",
        "Core & Balance",
        "Breathing drills and bird dogs",
        strength(
            3,
            45,
            vec![
                exercise("Dead Bug", RepSpec::Reps(10), Intensity::Rpe(5.0)),
                exercise("Side Plank", RepSpec::Time(30), Intensity::Rpe(6.0)),
                exercise("Single-Leg Balance", RepSpec::Time(45), Intensity::Rpe(4.0)),
            ],
        ),
    )
}

// ── Builders ─────────────────────────────────────────────────────────────────

/// Warmup, the given main block, then a cooldown.
fn session(id: &str, title: &str, warmup: &str, main: Block) -> Session {
    Session {
        id: SessionId::new(id),
        title: title.to_owned(),
        blocks: vec![
            Block {
                label: Some("Warm-up".into()),
                block_type: BlockType::Warmup,
                rounds: 1,
                rest_sec_between_rounds: 0,
                items: vec![BlockStep::Warmup(WarmupStep {
                    description: warmup.to_owned(),
                    duration_sec: 300,
                })],
            },
            main,
            Block {
                label: Some("Cool-down".into()),
                block_type: BlockType::Cooldown,
                rounds: 1,
                rest_sec_between_rounds: 0,
                items: vec![BlockStep::Cooldown(CooldownStep {
                    description: "Light stretching".into(),
                    duration_sec: 300,
                })],
            },
        ],
    }
}

fn strength(rounds: u32, rest_sec: u32, items: Vec<BlockStep>) -> Block {
    Block {
        label: Some("Main".into()),
        block_type: BlockType::Strength,
        rounds,
        rest_sec_between_rounds: rest_sec,
        items,
    }
}

fn exercise(name: &str, rep_spec: RepSpec, intensity: Intensity) -> BlockStep {
    BlockStep::ExercisePrescription(ExercisePrescription {
        exercise_name: name.to_owned(),
        rep_spec,
        intensity,
    })
}
