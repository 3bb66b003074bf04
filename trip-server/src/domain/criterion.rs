//! Optimization criteria for ranking transit options.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The field used to pick one transit option among several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationCriterion {
    #[default]
    TotalTime,
    Transfers,
    WaitTime,
    WalkingTime,
}

impl OptimizationCriterion {
    /// All criteria in dropdown order.
    pub const ALL: [OptimizationCriterion; 4] = [
        OptimizationCriterion::TotalTime,
        OptimizationCriterion::Transfers,
        OptimizationCriterion::WaitTime,
        OptimizationCriterion::WalkingTime,
    ];

    /// Parse a criterion value, falling back to `TotalTime` for anything
    /// unrecognised.
    pub fn parse_or_default(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or_default()
    }

    /// Form value, e.g. `"wait_time"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationCriterion::TotalTime => "total_time",
            OptimizationCriterion::Transfers => "transfers",
            OptimizationCriterion::WaitTime => "wait_time",
            OptimizationCriterion::WalkingTime => "walking_time",
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            OptimizationCriterion::TotalTime => "Total Time",
            OptimizationCriterion::Transfers => "Number of Transfers",
            OptimizationCriterion::WaitTime => "Wait Time",
            OptimizationCriterion::WalkingTime => "Walking Time",
        }
    }
}

impl fmt::Display for OptimizationCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OptimizationCriterion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&s))
    }
}
