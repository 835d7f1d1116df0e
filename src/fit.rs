use crate::benchmarks::{PER90_EPSILON, round2};
use crate::record::{ClubRecord, PlayerRecord, Role};
use crate::valuation::MarketValue;

/// Sub-score returned whenever no rule matches, the club is absent, or a
/// per-90 computation goes non-finite.
pub const NEUTRAL_SUB_SCORE: f64 = 50.0;

/// Weights for the nine fit sub-dimensions. The source history carried
/// two incompatible sets; this crate fixes the ROI variant (personal
/// production at 0.05, roi factor at 0.05) so that a supplied valuation
/// actually participates in the blend. Must sum to 1.0, checked by
/// `benchmarks::validate_tables`.
#[derive(Debug, Clone, Copy)]
pub struct FitWeights {
    pub style: f64,
    pub pressing: f64,
    pub def_line: f64,
    pub xg_match: f64,
    pub pass_match: f64,
    pub formation_role: f64,
    pub age_dynamics: f64,
    pub personal_index: f64,
    pub roi_factor: f64,
}

pub const FIT_WEIGHTS: FitWeights = FitWeights {
    style: 0.20,
    pressing: 0.15,
    def_line: 0.10,
    xg_match: 0.15,
    pass_match: 0.10,
    formation_role: 0.15,
    age_dynamics: 0.05,
    personal_index: 0.05,
    roi_factor: 0.05,
};

impl FitWeights {
    pub fn total(&self) -> f64 {
        self.style
            + self.pressing
            + self.def_line
            + self.xg_match
            + self.pass_match
            + self.formation_role
            + self.age_dynamics
            + self.personal_index
            + self.roi_factor
    }
}

/// Tactical/stylistic compatibility score in [0, 100] for one player
/// against one club.
///
/// Each sub-dimension is an ordered rule ladder: the first matching rule
/// overrides the 50-point neutral default. A missing club leaves every
/// club-dependent sub-score at neutral, so ranking "against all clubs"
/// and scoring with no club at all are both legal. Total function; never
/// fails.
pub fn score_fit(
    player: &PlayerRecord,
    club: Option<&ClubRecord>,
    valuation_override: Option<MarketValue>,
) -> f64 {
    let role = player.role();
    let w = &FIT_WEIGHTS;

    let score = style_score(role, club) * w.style
        + pressing_score(role, club) * w.pressing
        + defensive_line_score(role, club) * w.def_line
        + xg_match_score(role, player.goals, club) * w.xg_match
        + pass_style_score(player, club) * w.pass_match
        + formation_role_score(role, club) * w.formation_role
        + age_dynamics_score(player.age, club) * w.age_dynamics
        + personal_index_score(player) * w.personal_index
        + roi_score(player, valuation_override) * w.roi_factor;

    round2(score.min(100.0))
}

fn first_match(rules: &[(bool, f64)]) -> f64 {
    rules
        .iter()
        .find_map(|&(hit, score)| hit.then_some(score))
        .unwrap_or(NEUTRAL_SUB_SCORE)
}

pub fn style_score(role: Role, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    let style = club.playing_style.as_str();
    first_match(&[
        (style.contains("Attacking") && role == Role::Forward, 100.0),
        (style.contains("Balanced") && role == Role::Midfielder, 100.0),
        (style.contains("Low Block") && role == Role::Defender, 90.0),
    ])
}

pub fn pressing_score(role: Role, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    let press = club.pressing_style.as_str();
    first_match(&[
        (press.contains("High Press") && role == Role::Forward, 100.0),
        (press.contains("Mid Block") && role == Role::Midfielder, 80.0),
    ])
}

pub fn defensive_line_score(role: Role, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    let line = club.defensive_line.as_str();
    first_match(&[
        (line.contains("High") && role == Role::Defender, 100.0),
        (line.contains("Medium") && role == Role::Midfielder, 80.0),
    ])
}

pub fn xg_match_score(role: Role, goals: f64, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    first_match(&[
        (
            club.team_xg >= 1.8 && role == Role::Forward && goals >= 5.0,
            100.0,
        ),
        (club.team_xg <= 1.2 && role == Role::Defender, 100.0),
        (club.team_xg >= 1.4 && role == Role::Midfielder, 80.0),
    ])
}

pub fn pass_style_score(player: &PlayerRecord, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    let rate =
        (player.key_passes + player.dribbles) / (player.minutes / 90.0 + PER90_EPSILON);
    // A non-finite rate reverts to neutral rather than poisoning the blend.
    if !rate.is_finite() {
        return NEUTRAL_SUB_SCORE;
    }
    let acc = club.pass_accuracy;
    first_match(&[
        (acc >= 87.0 && rate >= 2.5, 100.0),
        (acc <= 82.0 && rate < 1.5, 90.0),
        (acc >= 85.0 && rate >= 1.5, 80.0),
    ])
}

pub fn formation_role_score(role: Role, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    let formation = club.common_formation.as_str();
    first_match(&[
        (formation.contains("4-3-3") && role == Role::Forward, 100.0),
        (
            formation.contains("4-2-3-1") && role == Role::Midfielder,
            100.0,
        ),
        (formation.contains("3-5-2") && role == Role::Defender, 100.0),
    ])
}

pub fn age_dynamics_score(age: u32, club: Option<&ClubRecord>) -> f64 {
    let Some(club) = club else {
        return NEUTRAL_SUB_SCORE;
    };
    first_match(&[
        (age <= 20 && club.playing_style.contains("Attacking"), 100.0),
        (age <= 23, 80.0),
    ])
}

/// Per-90 production index over goals, assists, half-weighted dribbles
/// and key passes, double-weighted xG plus xAG. Club-independent.
pub fn personal_index_score(player: &PlayerRecord) -> f64 {
    let index = ((player.goals + player.assists)
        + 0.5 * player.dribbles
        + 0.5 * player.key_passes
        + 2.0 * player.xg
        + player.xag)
        / (player.minutes / 90.0 + PER90_EPSILON);
    if !index.is_finite() {
        return NEUTRAL_SUB_SCORE;
    }
    first_match(&[(index >= 3.5, 100.0), (index >= 2.0, 80.0), (index <= 1.0, 60.0)])
}

/// ROI over `base = override (explicit unit) else stored market value`
/// and the stored projected value. Neutral unless both are positive.
pub fn roi_score(player: &PlayerRecord, valuation_override: Option<MarketValue>) -> f64 {
    let base = valuation_override
        .map(MarketValue::as_millions)
        .unwrap_or(player.market_value);
    let future = player.future_value;
    if base <= 0.0 || future <= 0.0 {
        return NEUTRAL_SUB_SCORE;
    }
    let roi = (future - base) / base;
    first_match(&[(roi >= 1.0, 100.0), (roi >= 0.5, 80.0), (roi >= 0.2, 65.0)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(pos: &str, age: u32) -> PlayerRecord {
        PlayerRecord {
            player: "Test Player".to_string(),
            age,
            pos: pos.to_string(),
            comp: "eng Premier League".to_string(),
            minutes: 900.0,
            goals: 4.0,
            assists: 3.0,
            dribbles: 6.0,
            key_passes: 4.0,
            tackles: 10.0,
            interceptions: 8.0,
            clearances: 12.0,
            blocks: 3.0,
            xg: 0.0,
            xag: 0.0,
            market_value: 0.0,
            future_value: 0.0,
        }
    }

    fn club(style: &str, press: &str, line: &str, formation: &str) -> ClubRecord {
        ClubRecord {
            club: "Test FC".to_string(),
            common_formation: formation.to_string(),
            playing_style: style.to_string(),
            pressing_style: press.to_string(),
            defensive_line: line.to_string(),
            pass_accuracy: 84.0,
            team_xg: 1.3,
        }
    }

    #[test]
    fn no_club_and_no_valuation_is_exactly_neutral() {
        // Personal index (4+3+3+2)/10 = 1.2 sits in the neutral band, so
        // all nine sub-scores default to 50 and the blend is exactly 50.
        let p = player("FW", 27);
        assert_eq!(score_fit(&p, None, None), 50.0);
    }

    #[test]
    fn style_ladder_first_match_wins() {
        let c = club("Attacking", "-", "-", "-");
        assert_eq!(style_score(Role::Forward, Some(&c)), 100.0);
        assert_eq!(style_score(Role::Midfielder, Some(&c)), NEUTRAL_SUB_SCORE);
        let balanced = club("Balanced", "-", "-", "-");
        assert_eq!(style_score(Role::Midfielder, Some(&balanced)), 100.0);
        let low = club("Low Block", "-", "-", "-");
        assert_eq!(style_score(Role::Defender, Some(&low)), 90.0);
        assert_eq!(style_score(Role::Defender, None), NEUTRAL_SUB_SCORE);
    }

    #[test]
    fn pressing_and_line_ladders() {
        let c = club("-", "High Press", "High", "-");
        assert_eq!(pressing_score(Role::Forward, Some(&c)), 100.0);
        assert_eq!(pressing_score(Role::Defender, Some(&c)), NEUTRAL_SUB_SCORE);
        assert_eq!(defensive_line_score(Role::Defender, Some(&c)), 100.0);
        let mid = club("-", "Mid Block", "Medium", "-");
        assert_eq!(pressing_score(Role::Midfielder, Some(&mid)), 80.0);
        assert_eq!(defensive_line_score(Role::Midfielder, Some(&mid)), 80.0);
    }

    #[test]
    fn xg_ladder_needs_goals_for_forwards() {
        let mut c = club("-", "-", "-", "-");
        c.team_xg = 1.9;
        assert_eq!(xg_match_score(Role::Forward, 5.0, Some(&c)), 100.0);
        assert_eq!(xg_match_score(Role::Forward, 4.0, Some(&c)), NEUTRAL_SUB_SCORE);
        c.team_xg = 1.1;
        assert_eq!(xg_match_score(Role::Defender, 0.0, Some(&c)), 100.0);
        c.team_xg = 1.5;
        assert_eq!(xg_match_score(Role::Midfielder, 0.0, Some(&c)), 80.0);
    }

    #[test]
    fn pass_style_ladder_and_zero_minutes_guard() {
        let mut p = player("MF", 25);
        let mut c = club("-", "-", "-", "-");

        c.pass_accuracy = 88.0;
        p.key_passes = 20.0;
        p.dribbles = 10.0; // rate 3.0
        assert_eq!(pass_style_score(&p, Some(&c)), 100.0);

        c.pass_accuracy = 81.0;
        p.key_passes = 5.0;
        p.dribbles = 5.0; // rate 1.0
        assert_eq!(pass_style_score(&p, Some(&c)), 90.0);

        c.pass_accuracy = 85.5;
        p.key_passes = 10.0;
        p.dribbles = 10.0; // rate 2.0
        assert_eq!(pass_style_score(&p, Some(&c)), 80.0);

        // Zero minutes: the epsilon keeps the rate finite and the
        // sub-score defined.
        p.minutes = 0.0;
        let score = pass_style_score(&p, Some(&c));
        assert!(score.is_finite());
    }

    #[test]
    fn formation_ladder() {
        let c433 = club("-", "-", "-", "4-3-3");
        assert_eq!(formation_role_score(Role::Forward, Some(&c433)), 100.0);
        assert_eq!(
            formation_role_score(Role::Midfielder, Some(&c433)),
            NEUTRAL_SUB_SCORE
        );
        let c4231 = club("-", "-", "-", "4-2-3-1");
        assert_eq!(formation_role_score(Role::Midfielder, Some(&c4231)), 100.0);
        let c352 = club("-", "-", "-", "3-5-2");
        assert_eq!(formation_role_score(Role::Defender, Some(&c352)), 100.0);
    }

    #[test]
    fn age_dynamics_ladder() {
        let attacking = club("Attacking", "-", "-", "-");
        let balanced = club("Balanced", "-", "-", "-");
        assert_eq!(age_dynamics_score(20, Some(&attacking)), 100.0);
        assert_eq!(age_dynamics_score(20, Some(&balanced)), 80.0);
        assert_eq!(age_dynamics_score(23, Some(&attacking)), 80.0);
        assert_eq!(age_dynamics_score(24, Some(&attacking)), NEUTRAL_SUB_SCORE);
        assert_eq!(age_dynamics_score(18, None), NEUTRAL_SUB_SCORE);
    }

    #[test]
    fn personal_index_tiers() {
        let mut p = player("FW", 25);
        p.minutes = 900.0;
        p.goals = 20.0;
        p.assists = 10.0;
        p.dribbles = 10.0;
        p.key_passes = 10.0; // index 4.0
        assert_eq!(personal_index_score(&p), 100.0);

        p.goals = 12.0;
        p.assists = 5.0;
        p.dribbles = 6.0;
        p.key_passes = 4.0; // index 2.2
        assert_eq!(personal_index_score(&p), 80.0);

        p.goals = 2.0;
        p.assists = 1.0;
        p.dribbles = 2.0;
        p.key_passes = 2.0; // index 0.5
        assert_eq!(personal_index_score(&p), 60.0);

        p.goals = 4.0;
        p.assists = 3.0;
        p.dribbles = 6.0;
        p.key_passes = 4.0; // index 1.2
        assert_eq!(personal_index_score(&p), NEUTRAL_SUB_SCORE);
    }

    #[test]
    fn roi_tiers_and_override() {
        let mut p = player("FW", 25);
        assert_eq!(roi_score(&p, None), NEUTRAL_SUB_SCORE);

        p.market_value = 20.0;
        p.future_value = 45.0; // roi 1.25
        assert_eq!(roi_score(&p, None), 100.0);

        p.future_value = 32.0; // roi 0.6
        assert_eq!(roi_score(&p, None), 80.0);

        p.future_value = 25.0; // roi 0.25
        assert_eq!(roi_score(&p, None), 65.0);

        p.future_value = 21.0; // roi 0.05
        assert_eq!(roi_score(&p, None), NEUTRAL_SUB_SCORE);

        // Override replaces the stored base value.
        let override_value = MarketValue::from_millions(10.0);
        assert_eq!(roi_score(&p, Some(override_value)), 100.0); // roi 1.1
        let raw = MarketValue::from_euros(10_000_000.0);
        assert_eq!(roi_score(&p, Some(raw)), 100.0);
    }

    #[test]
    fn dream_fit_is_clamped_and_bounded() {
        let mut p = player("FW", 19);
        p.minutes = 2500.0;
        p.goals = 20.0;
        p.assists = 12.0;
        p.dribbles = 60.0;
        p.key_passes = 50.0;
        p.xg = 18.0;
        p.xag = 10.0;
        p.market_value = 10.0;
        p.future_value = 30.0;
        let mut c = club("Attacking", "High Press", "High", "4-3-3");
        c.pass_accuracy = 88.0;
        c.team_xg = 2.0;
        let score = score_fit(&p, Some(&c), None);
        assert!(score > 85.0);
        assert!(score <= 100.0);
    }

    #[test]
    fn fit_is_idempotent() {
        let p = player("MF", 21);
        let c = club("Balanced", "Mid Block", "Medium", "4-2-3-1");
        let a = score_fit(&p, Some(&c), None);
        let b = score_fit(&p, Some(&c), None);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn weight_set_sums_to_one() {
        assert!((FIT_WEIGHTS.total() - 1.0).abs() < 1e-9);
    }
}
