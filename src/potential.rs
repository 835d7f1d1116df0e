use crate::benchmarks::{self, FORM_BONUS, benchmarks_for};
use crate::record::{PlayerRecord, Role};

/// Projected-success score in [0, 100] for one player season.
///
/// Pipeline: per-role benchmark ratios (or the flat fallback for an
/// unclassified position), a recent-form bonus when any minutes were
/// played, then age and league multipliers, clamped and rounded to two
/// decimals. Total over any well-formed record; never fails.
pub fn score_potential(player: &PlayerRecord) -> f64 {
    let role = player.role();

    let mut score = match benchmarks_for(role) {
        Some(table) => table
            .iter()
            .map(|b| (player.metric(b.metric) / b.reference) * b.weight)
            .sum(),
        // Role::Other has no benchmark table; credit raw production plus
        // playing time.
        None => player.goals * 3.0 + player.assists * 2.0 + player.minutes / 250.0,
    };

    if player.minutes > 0.0 {
        score += form_bonus(contribution_per_90(player));
    }

    score *= benchmarks::age_multiplier(player.age);
    score *= benchmarks::league_multiplier(&player.comp);

    benchmarks::round2(score.min(100.0))
}

/// Goal involvements per 90, with dribbles and key passes at half weight.
/// Only called with minutes > 0.
fn contribution_per_90(player: &PlayerRecord) -> f64 {
    (player.goals + player.assists + 0.5 * player.dribbles + 0.5 * player.key_passes)
        / player.minutes
        * 90.0
}

fn form_bonus(contribution_per_90: f64) -> f64 {
    FORM_BONUS
        .iter()
        .find(|(threshold, _)| contribution_per_90 >= *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}
