use rand::Rng;

use crate::record::{ClubRecord, PlayerRecord};

const POSITIONS: [&str; 9] = [
    "GK", "DF", "DF,MF", "MF", "MF,FW", "FW", "RW,FW", "CB", "ST",
];

const COMPETITIONS: [&str; 7] = [
    "eng Premier League",
    "es La Liga",
    "de Bundesliga",
    "it Serie A",
    "fr Ligue 1",
    "pt Primeira Liga",
    "nl Eredivisie",
];

const STYLES: [&str; 4] = ["Attacking", "Balanced", "Low Block", "Counter"];
const PRESSING: [&str; 3] = ["High Press", "Mid Block", "Low Block"];
const LINES: [&str; 3] = ["High", "Medium", "Deep"];
const FORMATIONS: [&str; 5] = ["4-3-3", "4-2-3-1", "3-5-2", "4-4-2", "5-3-2"];

/// Synthetic season rows for benches and property tests. Stat ranges are
/// loose but plausible; seed the rng for reproducible pools.
pub fn sample_players(rng: &mut impl Rng, n: usize) -> Vec<PlayerRecord> {
    (0..n)
        .map(|idx| {
            let minutes = rng.gen_range(0.0..3400.0_f64).floor();
            PlayerRecord {
                player: format!("Player {:03}", idx + 1),
                age: rng.gen_range(16..36),
                pos: POSITIONS[rng.gen_range(0..POSITIONS.len())].to_string(),
                comp: COMPETITIONS[rng.gen_range(0..COMPETITIONS.len())].to_string(),
                minutes,
                goals: rng.gen_range(0.0..25.0_f64).floor(),
                assists: rng.gen_range(0.0..15.0_f64).floor(),
                dribbles: rng.gen_range(0.0..80.0_f64).floor(),
                key_passes: rng.gen_range(0.0..70.0_f64).floor(),
                tackles: rng.gen_range(0.0..90.0_f64).floor(),
                interceptions: rng.gen_range(0.0..70.0_f64).floor(),
                clearances: rng.gen_range(0.0..150.0_f64).floor(),
                blocks: rng.gen_range(0.0..40.0_f64).floor(),
                xg: rng.gen_range(0.0..20.0),
                xag: rng.gen_range(0.0..12.0),
                market_value: rng.gen_range(0.0..120.0),
                future_value: rng.gen_range(0.0..160.0),
            }
        })
        .collect()
}

pub fn sample_clubs(rng: &mut impl Rng, n: usize) -> Vec<ClubRecord> {
    (0..n)
        .map(|idx| ClubRecord {
            club: format!("Club {:03}", idx + 1),
            common_formation: FORMATIONS[rng.gen_range(0..FORMATIONS.len())].to_string(),
            playing_style: STYLES[rng.gen_range(0..STYLES.len())].to_string(),
            pressing_style: PRESSING[rng.gen_range(0..PRESSING.len())].to_string(),
            defensive_line: LINES[rng.gen_range(0..LINES.len())].to_string(),
            pass_accuracy: rng.gen_range(74.0..93.0),
            team_xg: rng.gen_range(0.7..2.4),
        })
        .collect()
}
