//! Health classification assigned to advisors at creation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued risk classification.
///
/// Assigned exactly once when an advisor is created and persisted with the
/// record; reads and updates never recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
}

impl HealthStatus {
    /// Maps a score drawn from [1, 100] onto a classification:
    /// 1-60 Green, 61-80 Yellow, 81-100 Red.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=60 => HealthStatus::Green,
            61..=80 => HealthStatus::Yellow,
            _ => HealthStatus::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Green => "Green",
            HealthStatus::Yellow => "Yellow",
            HealthStatus::Red => "Red",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
