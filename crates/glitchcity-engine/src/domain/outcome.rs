//! Outcome payloads produced by the narrative service.
//!
//! Payloads arrive as untrusted JSON. The three required fields
//! (`description`, `missionCompleted`, `statsChange`) must be present and
//! well-typed or the whole payload is rejected; optional sections are read
//! leniently and default to "no update" when malformed.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use thiserror::Error;

use super::stalker::AiState;
use super::stats::StatsDelta;

/// Description used when the narrative service is unreachable or its answer
/// is unusable.
pub const CONNECTION_LOST_DESCRIPTION: &str = "The city's connection to the master server flickers and dies. A dial-up modem sound screeches in the distance. Please try again.";

/// Why a raw payload was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload root is not a JSON object.
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field has the wrong JSON type.
    #[error("field `{field}` must be {expected}")]
    WrongType {
        /// Path of the offending field.
        field: &'static str,
        /// Human-readable expected type.
        expected: &'static str,
    },

    /// The deserializer gave up on the payload.
    #[error("payload could not be read: {0}")]
    Unreadable(String),
}

/// Combat result reported for a turn with an active enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncounterUpdate {
    pub enemy_defeated: bool,
    pub flee_success: bool,
}

/// Autonomous movement of a stalking enemy for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StalkerUpdate {
    /// `None` lets the stalker state machine pick its default.
    pub distance_change: Option<i32>,
    pub new_ai_state: Option<AiState>,
    /// Narration of the enemy's move, shown verbatim in the log.
    pub description: Option<String>,
}

/// A validated outcome for one player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomePayload {
    pub description: String,
    pub mission_completed: bool,
    pub stats_change: StatsDelta,
    pub encounter_update: Option<EncounterUpdate>,
    pub stalker_update: Option<StalkerUpdate>,
}

/// A JSON value that either has the expected shape or is kept only as
/// evidence that something was there.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    /// Arrays never stand in for objects.
    Array(#[allow(dead_code)] Vec<IgnoredAny>),
    Valid(T),
    Invalid(#[allow(dead_code)] IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Array(_) | Self::Invalid(_) => None,
        }
    }
}

/// Wire shape of an outcome. `None` means absent or `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOutcome {
    #[serde(default)]
    description: Option<Lenient<String>>,
    #[serde(default)]
    mission_completed: Option<Lenient<bool>>,
    #[serde(default)]
    stats_change: Option<Lenient<RawStatsChange>>,
    #[serde(default, deserialize_with = "lenient")]
    encounter_update: Option<RawEncounterUpdate>,
    #[serde(default, deserialize_with = "lenient")]
    stalker_update: Option<RawStalkerUpdate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatsChange {
    #[serde(default)]
    health: Option<Lenient<Number>>,
    #[serde(default)]
    armor: Option<Lenient<Number>>,
    #[serde(default)]
    glitch_level: Option<Lenient<Number>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEncounterUpdate {
    #[serde(default, deserialize_with = "lenient")]
    enemy_defeated: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    flee_success: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStalkerUpdate {
    #[serde(default, deserialize_with = "lenient")]
    distance_change: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    new_ai_state: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<String>,
}

/// Deserializes an optional field, turning a wrong-typed value into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Lenient<T>>::deserialize(deserializer)?.and_then(Lenient::into_valid))
}

fn required<T>(
    field: Option<Lenient<T>>,
    name: &'static str,
    expected: &'static str,
) -> Result<T, PayloadError> {
    match field {
        None => Err(PayloadError::MissingField(name)),
        Some(Lenient::Valid(value)) => Ok(value),
        Some(Lenient::Array(_) | Lenient::Invalid(_)) => Err(PayloadError::WrongType {
            field: name,
            expected,
        }),
    }
}

fn required_delta(field: Option<Lenient<Number>>, name: &'static str) -> Result<i32, PayloadError> {
    let number = required(field, name, "a number")?;
    integer(&number).ok_or(PayloadError::WrongType {
        field: name,
        expected: "a number",
    })
}

/// Reads a JSON number as an `i32`, rounding fractions and saturating at the
/// type bounds.
#[allow(clippy::cast_possible_truncation)]
fn integer(number: &Number) -> Option<i32> {
    let wide = match number.as_i64() {
        Some(n) => n,
        None => {
            let float = number.as_f64().filter(|f| f.is_finite())?;
            // Float-to-int `as` casts saturate.
            float.round() as i64
        }
    };
    let bounded = wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    i32::try_from(bounded).ok()
}

impl OutcomePayload {
    /// The fixed payload substituted for a failed or malformed service call.
    #[must_use]
    pub fn connection_lost() -> Self {
        Self {
            description: CONNECTION_LOST_DESCRIPTION.to_owned(),
            mission_completed: false,
            stats_change: StatsDelta::new(0, 0, 1),
            encounter_update: None,
            stalker_update: None,
        }
    }

    /// Validates an untrusted JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` if the root is not an object or a required
    /// field is missing or wrong-typed.
    pub fn from_json(value: &Value) -> Result<Self, PayloadError> {
        if !value.is_object() {
            return Err(PayloadError::NotAnObject);
        }
        let raw = RawOutcome::deserialize(value)
            .map_err(|err| PayloadError::Unreadable(err.to_string()))?;

        let description = required(raw.description, "description", "a non-empty string")?;
        if description.trim().is_empty() {
            return Err(PayloadError::WrongType {
                field: "description",
                expected: "a non-empty string",
            });
        }
        let mission_completed = required(raw.mission_completed, "missionCompleted", "a boolean")?;
        let stats = required(raw.stats_change, "statsChange", "an object")?;
        let stats_change = StatsDelta::new(
            required_delta(stats.health, "statsChange.health")?,
            required_delta(stats.armor, "statsChange.armor")?,
            required_delta(stats.glitch_level, "statsChange.glitchLevel")?,
        );

        Ok(Self {
            description,
            mission_completed,
            stats_change,
            encounter_update: raw.encounter_update.map(|update| EncounterUpdate {
                enemy_defeated: update.enemy_defeated.unwrap_or(false),
                flee_success: update.flee_success.unwrap_or(false),
            }),
            stalker_update: raw.stalker_update.map(|update| StalkerUpdate {
                distance_change: update.distance_change.as_ref().and_then(integer),
                new_ai_state: update.new_ai_state.as_deref().and_then(AiState::parse),
                description: update
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_owned),
            }),
        })
    }
}
