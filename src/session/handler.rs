use actix::*;
use log::info;
use uuid::Uuid;

use crate::game::Tapper;

/// Actor owning the tap counts of one game session.
///
/// The mailbox serializes every command, so taps arriving from both players
/// at once are applied one after the other against the latest counts.
pub struct TapperSession {
    pub id: Uuid,
    pub tapper: Tapper,
}

impl Default for TapperSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TapperSession {
    pub fn new() -> Self {
        TapperSession {
            id: Uuid::new_v4(),
            tapper: Tapper::new(),
        }
    }
}

impl Actor for TapperSession {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!("Tapper session started: {}", self.id);
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        info!(
            "Tapper session {} stopping with {} subscribers",
            self.id,
            self.tapper.observer_count()
        );
        Running::Stop
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("Tapper session closed: {}", self.id);
    }
}
