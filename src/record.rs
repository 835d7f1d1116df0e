use serde::{Deserialize, Serialize};

/// One season row for one player, as supplied by the upstream tabular
/// source. Field renames match the source columns exactly; the scorers
/// never mutate a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Pos")]
    pub pos: String,
    #[serde(rename = "Comp")]
    pub comp: String,
    #[serde(rename = "Min")]
    pub minutes: f64,
    #[serde(rename = "Gls")]
    pub goals: f64,
    #[serde(rename = "Ast")]
    pub assists: f64,
    #[serde(rename = "Succ")]
    pub dribbles: f64,
    #[serde(rename = "KP")]
    pub key_passes: f64,
    #[serde(rename = "Tkl")]
    pub tackles: f64,
    #[serde(rename = "Int")]
    pub interceptions: f64,
    #[serde(rename = "Clr")]
    pub clearances: f64,
    #[serde(rename = "Blocks")]
    pub blocks: f64,
    #[serde(default, rename = "xG")]
    pub xg: f64,
    #[serde(default, rename = "xAG")]
    pub xag: f64,
    /// Current market value in millions of euros; 0 when unknown.
    #[serde(default, rename = "Market_Value")]
    pub market_value: f64,
    /// Projected future market value in millions of euros; 0 when unknown.
    #[serde(default, rename = "Future_Value")]
    pub future_value: f64,
}

/// One club's tactical profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubRecord {
    #[serde(rename = "Club")]
    pub club: String,
    #[serde(rename = "Common Formation")]
    pub common_formation: String,
    #[serde(rename = "Playing Style")]
    pub playing_style: String,
    #[serde(rename = "Pressing Style")]
    pub pressing_style: String,
    #[serde(rename = "Defensive Line Depth")]
    pub defensive_line: String,
    #[serde(rename = "Pass Accuracy (%)")]
    pub pass_accuracy: f64,
    #[serde(rename = "Team xG per Match")]
    pub team_xg: f64,
}

/// Counting metrics the benchmark tables index by.
#[derive(Debug, Clone, Copy)]
pub enum Metric {
    Minutes,
    Goals,
    Assists,
    Dribbles,
    KeyPasses,
    Tackles,
    Interceptions,
    Clearances,
    Blocks,
}

impl PlayerRecord {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Minutes => self.minutes,
            Metric::Goals => self.goals,
            Metric::Assists => self.assists,
            Metric::Dribbles => self.dribbles,
            Metric::KeyPasses => self.key_passes,
            Metric::Tackles => self.tackles,
            Metric::Interceptions => self.interceptions,
            Metric::Clearances => self.clearances,
            Metric::Blocks => self.blocks,
        }
    }

    pub fn role(&self) -> Role {
        Role::from_position(&self.pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Other,
}

/// Primary position tags, in priority order.
const PRIMARY_TAGS: [(&str, Role); 4] = [
    ("GK", Role::Goalkeeper),
    ("DF", Role::Defender),
    ("MF", Role::Midfielder),
    ("FW", Role::Forward),
];

/// Common position codes used by sources that don't emit the four primary
/// tags ("CB", "ST", ...). Scanned in the same role priority order.
const ALIAS_TAGS: [(&str, Role); 14] = [
    ("KEEPER", Role::Goalkeeper),
    ("CB", Role::Defender),
    ("WB", Role::Defender),
    ("LB", Role::Defender),
    ("RB", Role::Defender),
    ("BACK", Role::Defender),
    ("DM", Role::Midfielder),
    ("CM", Role::Midfielder),
    ("AM", Role::Midfielder),
    ("ST", Role::Forward),
    ("CF", Role::Forward),
    ("LW", Role::Forward),
    ("RW", Role::Forward),
    ("WING", Role::Forward),
];

impl Role {
    /// Classify a free-text position field ("RW,FW", "DF,MF", "CB", ...)
    /// into exactly one role. First the four primary tags are tested as
    /// substrings in priority order, then common position-code aliases;
    /// anything that matches neither is `Other` (scored, not rejected).
    pub fn from_position(raw: &str) -> Role {
        let pos = raw.trim().to_uppercase();
        if pos.is_empty() {
            return Role::Other;
        }
        for (tag, role) in PRIMARY_TAGS {
            if pos.contains(tag) {
                return role;
            }
        }
        for (tag, role) in ALIAS_TAGS {
            if pos.contains(tag) {
                return role;
            }
        }
        Role::Other
    }
}
