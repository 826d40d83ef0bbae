//! Workout-plan domain shared by the Ascent services.
//!
//! Pure types and the JSON wire contract; no framework or storage dependencies.
//! The wire shape for every discriminated union is a plain string tag plus flat
//! optional sibling payload fields, see [`wire`].

/// Declares a closed string enum: serde, `Display`, and a `FromStr` that
/// reports unknown values as [`UnknownVariant`] tagged with the wire field name.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::error::UnknownVariant {
                        field: $field,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

pub mod error;
pub mod id;
pub mod plan;
pub mod step;
pub mod timestamp;
pub mod wire;

pub use error::{PlanError, UnknownVariant};
pub use id::{OnboardingId, PlanId, SessionId, UserId};
pub use plan::{Block, BlockType, Goal, Plan, PlannedDay, PlannedWeek, Session, SessionIndex};
pub use step::{
    BlockStep, BlockStepKind, CooldownStep, ExercisePrescription, Intensity, IntensityMode,
    RepKind, RepSpec, RestStep, WarmupStep,
};
