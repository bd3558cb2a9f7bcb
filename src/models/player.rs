use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two competitors in a match.
///
/// The derived ordering is the iteration order of every per-player map, so
/// `One` is always visited before `Two`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "One"),
            Player::Two => write!(f, "Two"),
        }
    }
}
