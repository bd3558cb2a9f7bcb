use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Player;

/// Presentation data for one player while a game is running
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub taps: u32,
    /// Share of the screen allotted to this player, in `[0, 1]`.
    pub fraction: f32,
}

impl Default for Progress {
    fn default() -> Self {
        Progress { taps: 0, fraction: 0.5 }
    }
}

/// Published phase of a game, always derived from the tap counts
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GameState {
    Starting,
    Playing {
        progress: BTreeMap<Player, Progress>,
    },
    Finished {
        /// `None` is a draw.
        winner: Option<Player>,
        winner_score: u32,
        loser_score: u32,
    },
}

impl GameState {
    /// The tied opening position: both players at zero taps, half the screen each.
    pub fn tied() -> GameState {
        GameState::Playing {
            progress: Player::ALL
                .iter()
                .map(|player| (*player, Progress::default()))
                .collect(),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished { .. })
    }
}
