use crate::models::{GameState, Player};

/// Convert a player to its wire/string representation
pub fn player_to_string(player: Player) -> String {
    match player {
        Player::One => "one".to_string(),
        Player::Two => "two".to_string(),
    }
}

/// Get the current game status as a string
pub fn get_game_status(state: &GameState) -> String {
    match state {
        GameState::Starting => "starting".to_string(),
        GameState::Playing { progress } => {
            let mut leader: Option<Player> = None;
            let mut best = 0;
            for (player, entry) in progress {
                if entry.taps > best {
                    best = entry.taps;
                    leader = Some(*player);
                } else if entry.taps == best {
                    leader = None;
                }
            }
            match leader {
                Some(player) => format!("{}_leads", player_to_string(player)),
                None => "tied".to_string(),
            }
        }
        GameState::Finished { winner: Some(Player::One), .. } => "one_wins".to_string(),
        GameState::Finished { winner: Some(Player::Two), .. } => "two_wins".to_string(),
        GameState::Finished { winner: None, .. } => "draw".to_string(),
    }
}

/// Human readable result line for a finished game
pub fn describe_result(state: &GameState) -> Option<String> {
    match state {
        GameState::Finished {
            winner: Some(winner),
            winner_score,
            loser_score,
        } => Some(format!("{} won {} to {}", winner, winner_score, loser_score)),
        GameState::Finished { winner: None, .. } => Some("Draw".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::reducer::{derive_state, TapCounts};

    fn state(one: u32, two: u32) -> GameState {
        let counts: TapCounts = [(Player::One, one), (Player::Two, two)].into_iter().collect();
        derive_state(&counts)
    }

    #[test]
    fn status_strings() {
        assert_eq!(get_game_status(&GameState::Starting), "starting");
        assert_eq!(get_game_status(&state(0, 0)), "tied");
        assert_eq!(get_game_status(&state(3, 3)), "tied");
        assert_eq!(get_game_status(&state(2, 5)), "two_leads");
        assert_eq!(get_game_status(&state(25, 5)), "one_wins");
    }

    #[test]
    fn result_lines() {
        assert_eq!(describe_result(&state(25, 10)).as_deref(), Some("One won 25 to 10"));
        let draw = GameState::Finished {
            winner: None,
            winner_score: 0,
            loser_score: 0,
        };
        assert_eq!(describe_result(&draw).as_deref(), Some("Draw"));
        assert_eq!(describe_result(&state(1, 0)), None);
    }
}
