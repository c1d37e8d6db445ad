//! Budget variance classification.
//!
//! Compares percent-of-budget-consumed against percent-of-progress-complete
//! to label a project's budget health, plus the shared pace heuristic the
//! progress and budget bars color themselves with.

use serde::{Deserialize, Serialize};

/// Dead-band, in percentage points, inside which spend pace is neutral
const PACE_DEAD_BAND: f64 = 10.0;

/// Budget health label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Spend is at or below progress
    Within,
    /// Spend has outpaced progress
    Exceeded,
}

impl VarianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VarianceStatus::Within => "within budget",
            VarianceStatus::Exceeded => "exceeded",
        }
    }
}

impl std::fmt::Display for VarianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed budget deviation with its classification
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetVariance {
    pub status: VarianceStatus,
    /// percent_spent - percent_complete, signed
    pub deviation: f64,
}

/// Classify budget health from the two percentages.
///
/// `Exceeded` only when spend is strictly ahead of progress; equal pace
/// is `Within`.
pub fn classify(percent_spent: f64, percent_complete: f64) -> BudgetVariance {
    let deviation = percent_spent - percent_complete;
    let status = if percent_spent > percent_complete {
        VarianceStatus::Exceeded
    } else {
        VarianceStatus::Within
    };
    BudgetVariance { status, deviation }
}

/// Spend-pace heuristic shared by the progress and budget bars.
///
/// Red-leaning beyond +10 points of deviation, green-leaning below -10,
/// neutral inside the dead-band. The band must match across every view
/// for visual parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceIndicator {
    /// Spend running ahead of progress by more than the dead-band
    Overrun,
    /// Within the dead-band
    OnPace,
    /// Spend trailing progress by more than the dead-band
    Underrun,
}

impl PaceIndicator {
    /// Derive the indicator from the two percentages
    pub fn from_percentages(percent_spent: f64, percent_complete: f64) -> Self {
        if percent_spent > percent_complete + PACE_DEAD_BAND {
            PaceIndicator::Overrun
        } else if percent_spent < percent_complete - PACE_DEAD_BAND {
            PaceIndicator::Underrun
        } else {
            PaceIndicator::OnPace
        }
    }

    /// Shared bar color for this pace
    pub fn color(&self) -> &'static str {
        match self {
            PaceIndicator::Overrun => "#e74c3c",
            PaceIndicator::OnPace => "#3498db",
            PaceIndicator::Underrun => "#2ecc71",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
