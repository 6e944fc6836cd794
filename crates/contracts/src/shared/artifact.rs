use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// Extension of the temporary file on the server
pub const ARTIFACT_EXTENSION: &str = "png";

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a server-side temporary image: `<uuid-v4>.png`.
///
/// A fresh one is generated per decode activation and per encode submission
/// and is never reused. On the wire it is a plain string (`save_path`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactId(Uuid);

impl ArtifactId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    /// Random v4 uuid; in the browser the `js` feature of `uuid` draws from
    /// `crypto.getRandomValues`.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Filename as sent to the backend.
    pub fn file_name(&self) -> String {
        self.to_string()
    }

    pub fn parse(s: &str) -> Result<Self, ArtifactIdError> {
        let stem = s
            .strip_suffix(ARTIFACT_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .ok_or_else(|| ArtifactIdError::Extension(s.to_string()))?;

        Uuid::parse_str(stem)
            .map(ArtifactId::new)
            .map_err(|e| ArtifactIdError::Uuid(e.to_string()))
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0.hyphenated(), ARTIFACT_EXTENSION)
    }
}

impl FromStr for ArtifactId {
    type Err = ArtifactIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ArtifactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArtifactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ArtifactId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactIdError {
    #[error("artifact id must end with .{ext}: {0}", ext = ARTIFACT_EXTENSION)]
    Extension(String),

    #[error("invalid artifact uuid: {0}")]
    Uuid(String),
}
