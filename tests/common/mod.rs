use std::fs;
use std::path::PathBuf;

use fstar_scout::{ClubRecord, PlayerRecord};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

pub fn players() -> Vec<PlayerRecord> {
    serde_json::from_str(&read_fixture("players.json")).expect("players fixture should parse")
}

pub fn clubs() -> Vec<ClubRecord> {
    serde_json::from_str(&read_fixture("clubs.json")).expect("clubs fixture should parse")
}
