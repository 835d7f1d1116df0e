//! Scoring core for the FstarV scouting tool.
//!
//! Two pure scorers over season stat rows: a 0-100 potential score from a
//! player's raw counting stats ([`potential::score_potential`]) and a
//! 0-100 club-fit score from a player profile against a club's tactical
//! identity ([`fit::score_fit`]), plus the ranking, valuation, and
//! forecast-analysis helpers built on top of them. Data loading, search,
//! and presentation live outside this crate.

pub mod benchmarks;
pub mod fake_pool;
pub mod fit;
pub mod forecast;
pub mod potential;
pub mod rankings;
pub mod record;
pub mod valuation;

pub use fit::score_fit;
pub use potential::score_potential;
pub use record::{ClubRecord, PlayerRecord, Role};
pub use valuation::MarketValue;
