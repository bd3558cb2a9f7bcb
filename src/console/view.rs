use actix::*;
use log::{info, warn};

use crate::game::utils::{describe_result, get_game_status};
use crate::models::StateChanged;

/// Prints every published state as one JSON line followed by a status line
pub struct ConsoleView;

impl Actor for ConsoleView {
    type Context = Context<Self>;
}

impl Handler<StateChanged> for ConsoleView {
    type Result = ();

    fn handle(&mut self, msg: StateChanged, _: &mut Self::Context) {
        let state = msg.0;
        match serde_json::to_string(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Error serializing state: {}", e),
        }
        if let Some(result) = describe_result(&state) {
            info!("{}", result);
            println!("{} (type 'restart' to play again)", result);
        } else {
            println!("status: {}", get_game_status(&state));
        }
    }
}
