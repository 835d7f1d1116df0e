use std::collections::HashMap;

use anyhow::{Result, bail};
use once_cell::sync::Lazy;

use crate::fit::FIT_WEIGHTS;
use crate::record::{Metric, Role};

/// Epsilon added to every per-90 divisor so zero minutes never divides by
/// zero.
pub const PER90_EPSILON: f64 = 1e-6;

/// Multiplier applied to any competition not in the league table.
pub const LEAGUE_WEIGHT_DEFAULT: f64 = 0.90;

/// One reference entry: what a strong full-time season looks like for the
/// metric, and how much of the role's 100 points it carries.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub metric: Metric,
    pub reference: f64,
    pub weight: f64,
}

const fn bm(metric: Metric, reference: f64, weight: f64) -> Benchmark {
    Benchmark {
        metric,
        reference,
        weight,
    }
}

const GK_BENCHMARKS: [Benchmark; 4] = [
    bm(Metric::Minutes, 3000.0, 40.0),
    bm(Metric::Clearances, 30.0, 20.0),
    bm(Metric::Tackles, 10.0, 20.0),
    bm(Metric::Blocks, 15.0, 20.0),
];

const DF_BENCHMARKS: [Benchmark; 7] = [
    bm(Metric::Tackles, 50.0, 18.0),
    bm(Metric::Interceptions, 50.0, 18.0),
    bm(Metric::Clearances, 120.0, 18.0),
    bm(Metric::Blocks, 30.0, 10.0),
    bm(Metric::Minutes, 3000.0, 10.0),
    bm(Metric::Goals, 3.0, 13.0),
    bm(Metric::Assists, 2.0, 13.0),
];

const MF_BENCHMARKS: [Benchmark; 5] = [
    bm(Metric::Goals, 10.0, 20.0),
    bm(Metric::Assists, 10.0, 20.0),
    bm(Metric::Dribbles, 50.0, 20.0),
    bm(Metric::KeyPasses, 50.0, 20.0),
    bm(Metric::Minutes, 3000.0, 20.0),
];

const FW_BENCHMARKS: [Benchmark; 5] = [
    bm(Metric::Goals, 20.0, 30.0),
    bm(Metric::Assists, 15.0, 25.0),
    bm(Metric::Dribbles, 40.0, 15.0),
    bm(Metric::KeyPasses, 40.0, 15.0),
    bm(Metric::Minutes, 3000.0, 15.0),
];

/// Recent-form bonus ladder over contribution-per-90, first match wins.
pub const FORM_BONUS: [(f64, f64); 3] = [(1.2, 15.0), (0.9, 10.0), (0.6, 5.0)];

/// Age multiplier ladder, first match wins; older than 23 is identity.
pub const AGE_MULTIPLIERS: [(u32, f64); 2] = [(20, 1.10), (23, 1.05)];

static LEAGUE_WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("eng Premier League", 1.00),
        ("es La Liga", 0.98),
        ("de Bundesliga", 0.96),
        ("it Serie A", 0.95),
        ("fr Ligue 1", 0.93),
    ])
});

// A zero reference would turn a ratio into a division by zero at call
// time; that is a configuration error, so the tables are checked once
// when first used, not per score.
static VALIDATED: Lazy<()> = Lazy::new(|| {
    validate_tables().expect("scoring tables invalid");
});

/// Benchmark table for a role; `Other` has no table and is scored by the
/// flat fallback formula instead.
pub fn benchmarks_for(role: Role) -> Option<&'static [Benchmark]> {
    Lazy::force(&VALIDATED);
    match role {
        Role::Goalkeeper => Some(&GK_BENCHMARKS),
        Role::Defender => Some(&DF_BENCHMARKS),
        Role::Midfielder => Some(&MF_BENCHMARKS),
        Role::Forward => Some(&FW_BENCHMARKS),
        Role::Other => None,
    }
}

pub fn age_multiplier(age: u32) -> f64 {
    AGE_MULTIPLIERS
        .iter()
        .find(|(cap, _)| age <= *cap)
        .map(|(_, mult)| *mult)
        .unwrap_or(1.0)
}

/// Exact match on the trimmed competition name; no case folding, no
/// substring match. Unlisted competitions get the 0.90 default.
pub fn league_multiplier(comp: &str) -> f64 {
    LEAGUE_WEIGHTS
        .get(comp.trim())
        .copied()
        .unwrap_or(LEAGUE_WEIGHT_DEFAULT)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Invariant check for every constant table. Run once before the first
/// score and directly by tests.
pub fn validate_tables() -> Result<()> {
    for (role, table) in [
        (Role::Goalkeeper, GK_BENCHMARKS.as_slice()),
        (Role::Defender, DF_BENCHMARKS.as_slice()),
        (Role::Midfielder, MF_BENCHMARKS.as_slice()),
        (Role::Forward, FW_BENCHMARKS.as_slice()),
    ] {
        let mut weight_sum = 0.0;
        for b in table {
            if b.reference <= 0.0 {
                bail!("{role:?} benchmark for {:?} has zero reference", b.metric);
            }
            if b.weight <= 0.0 {
                bail!("{role:?} benchmark for {:?} has zero weight", b.metric);
            }
            weight_sum += b.weight;
        }
        if (weight_sum - 100.0).abs() > 1e-9 {
            bail!("{role:?} benchmark weights sum to {weight_sum}, expected 100");
        }
    }

    for (league, weight) in LEAGUE_WEIGHTS.iter() {
        if *weight <= 0.0 || *weight > 1.0 {
            bail!("league weight for {league} out of range: {weight}");
        }
    }

    let total = FIT_WEIGHTS.total();
    if (total - 1.0).abs() > 1e-9 {
        bail!("fit weights sum to {total}, expected 1.0");
    }

    Ok(())
}
