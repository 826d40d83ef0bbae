//! RFC 3339 timestamp encoding used by every time-valued wire field.
//!
//! Use as `#[serde(with = "ascent_domain::timestamp")]`. Encoding always
//! emits UTC with a `Z` suffix; decoding rejects anything that is not a full
//! RFC 3339 date-time (bare dates, missing offsets, free text).
//!
//! Precision is microseconds, the finest a `timestamptz` column keeps.
//! [`parse`] and [`now`] truncate, so every timestamp that enters the system
//! survives a trip through storage unchanged.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Sub-second digits kept.
pub const PRECISION: u16 = 6;

/// Current time at storage precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(PRECISION)
}

pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc).trunc_subsecs(PRECISION))
}

pub fn serialize<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    parse(&raw).map_err(|e| de::Error::custom(format_args!("invalid timestamp {raw:?}: {e}")))
}

/// Same encoding for `Option<DateTime<Utc>>`. Pair with `#[serde(default)]`
/// so an absent field decodes as `None`.
pub mod option {
    use super::*;

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => super::serialize(dt, s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(d)?
            .map(|raw| {
                parse(&raw)
                    .map_err(|e| de::Error::custom(format_args!("invalid timestamp {raw:?}: {e}")))
            })
            .transpose()
    }
}
