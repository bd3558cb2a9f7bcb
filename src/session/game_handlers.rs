use actix::prelude::SendError;
use actix::*;
use log::{debug, info};

use crate::models::*;
use crate::session::handler::TapperSession;

impl Handler<Start> for TapperSession {
    type Result = ();

    fn handle(&mut self, _: Start, _: &mut Self::Context) {
        info!("Session {}: start", self.id);
        self.tapper.start();
    }
}

impl Handler<Restart> for TapperSession {
    type Result = ();

    fn handle(&mut self, _: Restart, _: &mut Self::Context) {
        info!("Session {}: restart", self.id);
        self.tapper.restart();
    }
}

impl Handler<Tap> for TapperSession {
    type Result = ();

    fn handle(&mut self, msg: Tap, _: &mut Self::Context) {
        debug!("Session {}: tap {}", self.id, msg.0);
        self.tapper.tap(msg.0);
    }
}

impl Handler<GetState> for TapperSession {
    type Result = MessageResult<GetState>;

    fn handle(&mut self, _: GetState, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.tapper.state().clone())
    }
}

impl Handler<Subscribe> for TapperSession {
    type Result = MessageResult<Subscribe>;

    fn handle(&mut self, msg: Subscribe, _: &mut Self::Context) -> Self::Result {
        let recipient = msg.0;
        let id = self
            .tapper
            .subscribe(move |state| match recipient.try_send(StateChanged(state.clone())) {
                Ok(()) => true,
                Err(SendError::Full(msg)) => {
                    recipient.do_send(msg);
                    true
                }
                Err(SendError::Closed(_)) => false,
            });
        info!(
            "Session {}: subscriber {} added, {} total",
            self.id,
            id,
            self.tapper.observer_count()
        );
        MessageResult(id)
    }
}

impl Handler<Unsubscribe> for TapperSession {
    type Result = bool;

    fn handle(&mut self, msg: Unsubscribe, _: &mut Self::Context) -> bool {
        let removed = self.tapper.unsubscribe(msg.0);
        if removed {
            info!(
                "Session {}: subscriber {} removed, {} total",
                self.id,
                msg.0,
                self.tapper.observer_count()
            );
        }
        removed
    }
}

impl Handler<Close> for TapperSession {
    type Result = ();

    fn handle(&mut self, _: Close, ctx: &mut Self::Context) {
        info!("Session {}: close requested", self.id);
        ctx.stop();
    }
}
