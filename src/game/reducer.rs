use std::collections::BTreeMap;

use crate::models::{GameState, Player, Progress};

/// Taps a player needs to win a game.
pub const REQUIRED_TAPS_TO_WIN: u32 = 25;

/// Cumulative taps per player. Empty until the first game starts.
pub type TapCounts = BTreeMap<Player, u32>;

/// Counts for a freshly (re)started game.
pub fn fresh_counts() -> TapCounts {
    Player::ALL.iter().map(|player| (*player, 0)).collect()
}

/// Add one tap for `player`.
///
/// Returns `false` and leaves `counts` untouched when no game has been
/// started yet.
pub fn register_tap(counts: &mut TapCounts, player: Player) -> bool {
    match counts.get_mut(&player) {
        Some(taps) => {
            *taps = taps.saturating_add(1);
            true
        }
        None => false,
    }
}

/// Derive the published state from the tap counts.
pub fn derive_state(counts: &TapCounts) -> GameState {
    if counts.is_empty() {
        return GameState::Starting;
    }

    let total_taps: u64 = counts.values().map(|taps| u64::from(*taps)).sum();
    if total_taps == 0 {
        return GameState::tied();
    }

    let winner = counts
        .iter()
        .find(|(_, taps)| **taps >= REQUIRED_TAPS_TO_WIN);
    if let Some((winner, winner_score)) = winner {
        let loser_score = counts
            .iter()
            .find(|(player, _)| *player != winner)
            .map(|(_, taps)| *taps)
            .unwrap_or(0);
        return GameState::Finished {
            winner: Some(*winner),
            winner_score: *winner_score,
            loser_score,
        };
    }

    // First player with the highest count leads; later equal counts do not overtake.
    let (ahead, ahead_taps) = counts
        .iter()
        .fold(None, |lead: Option<(Player, u32)>, (player, taps)| match lead {
            Some((_, best)) if best >= *taps => lead,
            _ => Some((*player, *taps)),
        })
        .unwrap_or((Player::One, 0));

    let total = (2 * u64::from(REQUIRED_TAPS_TO_WIN) + total_taps) as f32;
    let ahead_fraction = (REQUIRED_TAPS_TO_WIN + ahead_taps) as f32 / total;
    let behind_fraction = 1.0 - ahead_fraction;

    let progress = counts
        .iter()
        .map(|(player, taps)| {
            let fraction = if *player == ahead {
                ahead_fraction
            } else {
                behind_fraction
            };
            (*player, Progress { taps: *taps, fraction })
        })
        .collect();

    GameState::Playing { progress }
}
