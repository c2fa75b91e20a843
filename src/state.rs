//! Approval workflow stage of a daily report.
//!
//! DESIGN
//! ======
//! The host sends the stage as a lowercase string. Parsing is strict here so
//! callers can tell "unknown" apart from a real stage; the presenter decides
//! what an unknown stage looks like on a card.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Error returned when a string is not one of the known report stages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report state: {0:?}")]
pub struct ParseStateError(pub String);

/// Workflow stage of a report record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportState {
    /// Being written; not yet sent for review.
    Draft,
    /// Waiting on a reviewer.
    Submitted,
    /// Accepted by a reviewer.
    Approved,
    /// Sent back by a reviewer.
    Rejected,
}

impl ReportState {
    /// Every stage, in workflow order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Submitted, Self::Approved, Self::Rejected];

    /// Wire name used by the host (`"draft"`, `"submitted"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable label shown on the card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ReportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportState {
    type Err = ParseStateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseStateError(other.to_owned())),
        }
    }
}
