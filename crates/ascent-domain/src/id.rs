//! Newtype wrappers for domain identifiers.
//!
//! Identifiers are opaque strings on the wire and in storage. Generated ids are
//! UUIDv7 text, so they sort roughly by creation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifies a registered user.
    UserId
);
string_id!(
    /// Identifies a workout plan.
    PlanId
);
string_id!(
    /// Identifies a session inside one plan. Unique only within that plan.
    SessionId
);
string_id!(
    /// Identifies one onboarding questionnaire submission.
    OnboardingId
);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl PlanId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl OnboardingId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}
