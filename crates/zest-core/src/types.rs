use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SpecStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a spec. Declaration order is the transition order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SpecStatus {
    #[default]
    New,
    Researched,
    Designed,
    Implemented,
}

impl SpecStatus {
    pub fn all() -> &'static [SpecStatus] {
        &[
            SpecStatus::New,
            SpecStatus::Researched,
            SpecStatus::Designed,
            SpecStatus::Implemented,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpecStatus::New => "new",
            SpecStatus::Researched => "researched",
            SpecStatus::Designed => "designed",
            SpecStatus::Implemented => "implemented",
        }
    }

    /// Parse a stored or requested value without choosing an error kind.
    pub fn parse(s: &str) -> Option<SpecStatus> {
        Self::all().iter().copied().find(|st| st.as_str() == s)
    }

    /// Comma-separated list of every status, for error messages.
    pub fn valid_list() -> String {
        Self::all()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpecStatus {
    type Err = crate::error::ZestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecStatus::parse(s).ok_or_else(|| crate::error::ZestError::InvalidStatus {
            value: s.to_string(),
            valid: SpecStatus::valid_list(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
