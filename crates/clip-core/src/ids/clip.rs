use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a published clip.
///
/// The value is the RFC 3339 timestamp (millisecond precision, `Z` suffix)
/// taken on the submitting client. Uniqueness is not checked server-side:
/// two clients submitting in the same millisecond produce the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl_id!(ClipId);

impl ClipId {
    /// Build an id from a unix timestamp in milliseconds.
    ///
    /// Out-of-range timestamps fall back to the unix epoch.
    pub fn from_timestamp_ms(ms: i64) -> Self {
        let at = DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or(DateTime::UNIX_EPOCH);
        Self(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Parse the id back into a timestamp, if it is one.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }
}
