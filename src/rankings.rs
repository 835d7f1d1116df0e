use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fit::score_fit;
use crate::record::{ClubRecord, PlayerRecord};
use crate::valuation::MarketValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubFit {
    pub club: String,
    pub fit_score: f64,
}

/// Score one player against every club, best fit first. Each club is an
/// independent `score_fit` call, so the scan runs on the rayon pool; the
/// sort ties-breaks on club name to keep output deterministic.
pub fn rank_clubs(
    player: &PlayerRecord,
    clubs: &[ClubRecord],
    valuation_override: Option<MarketValue>,
) -> Vec<ClubFit> {
    let mut rows: Vec<ClubFit> = clubs
        .par_iter()
        .map(|club| ClubFit {
            club: club.club.clone(),
            fit_score: score_fit(player, Some(club), valuation_override),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.club.cmp(&b.club))
    });
    rows
}

pub fn top_fits(
    player: &PlayerRecord,
    clubs: &[ClubRecord],
    valuation_override: Option<MarketValue>,
    n: usize,
) -> Vec<ClubFit> {
    let mut rows = rank_clubs(player, clubs, valuation_override);
    rows.truncate(n);
    rows
}

/// Qualitative bands shown alongside a fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitVerdict {
    /// >= 85: likely to succeed in this system.
    Excellent,
    /// >= 70: should adapt well.
    Workable,
    /// Below 70: needs tactical adjustment or patience.
    Stretch,
}

pub fn fit_verdict(fit_score: f64) -> FitVerdict {
    if fit_score >= 85.0 {
        FitVerdict::Excellent
    } else if fit_score >= 70.0 {
        FitVerdict::Workable
    } else {
        FitVerdict::Stretch
    }
}
