use serde::{Deserialize, Serialize};

/// A market value with its unit fixed at the call site. Earlier versions
/// of the tool guessed whether a user-entered number was millions or raw
/// euros from its magnitude; here the constructor names the unit and
/// everything downstream works in millions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketValue {
    millions: f64,
}

impl MarketValue {
    pub fn from_millions(millions: f64) -> Self {
        Self { millions }
    }

    pub fn from_euros(euros: f64) -> Self {
        Self {
            millions: euros / 1_000_000.0,
        }
    }

    pub fn as_millions(self) -> f64 {
        self.millions
    }
}

/// Rough transfer-value projection from a potential score: a 0-score
/// player maps to 20M and a 100-score player to 100M.
pub fn projected_value_millions(potential_score: f64) -> f64 {
    (potential_score / 100.0) * 80.0 + 20.0
}

/// Upside verdict comparing the projected value against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoiOutlook {
    /// Projection clears the current value; meaningful upside.
    Significant,
    /// Projection at or below the current value; modest or no upside.
    Modest,
}

pub fn roi_outlook(potential_score: f64, current: MarketValue) -> RoiOutlook {
    if projected_value_millions(potential_score) > current.as_millions() {
        RoiOutlook::Significant
    } else {
        RoiOutlook::Modest
    }
}
