use log::{debug, info, warn};

use crate::game::reducer::{derive_state, fresh_counts, register_tap, TapCounts};
use crate::models::{GameState, Player};

/// Handle returned by a subscription, used to unsubscribe later
pub type SubscriptionId = usize;

/// Returns `false` once it can no longer receive states and should be dropped.
type Observer = Box<dyn FnMut(&GameState) -> bool>;

/// Owns the tap counts of one game session and publishes the derived state.
///
/// Every mutation recomputes the state from the counts; observers are only
/// notified when the recomputed state differs from the cached one.
pub struct Tapper {
    counts: TapCounts,
    state: GameState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: SubscriptionId,
}

impl Default for Tapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Tapper {
    pub fn new() -> Self {
        Tapper {
            counts: TapCounts::new(),
            state: GameState::Starting,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Latest published state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn counts(&self) -> &TapCounts {
        &self.counts
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn start(&mut self) {
        info!("Starting game");
        self.reset();
    }

    pub fn restart(&mut self) {
        info!("Restarting game, discarding counts {:?}", self.counts);
        self.reset();
    }

    pub fn tap(&mut self, player: Player) {
        if !register_tap(&mut self.counts, player) {
            warn!("Ignoring tap for {} before the game has started", player);
            return;
        }
        debug!("Tap for {}, counts now {:?}", player, self.counts);
        self.recompute();
    }

    /// Register an observer. It is called right away with the current state.
    ///
    /// An observer returning `false` is removed; if it does so on the first
    /// call it is never registered.
    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&GameState) -> bool + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        if observer(&self.state) {
            self.observers.push((id, Box::new(observer)));
        } else {
            debug!("Observer {} gone before registration", id);
        }
        id
    }

    /// Returns whether an observer with that id was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn reset(&mut self) {
        self.counts = fresh_counts();
        self.recompute();
    }

    fn recompute(&mut self) {
        let state = derive_state(&self.counts);
        if state == self.state {
            return;
        }
        if state.is_finished() && !self.state.is_finished() {
            info!("Game finished: {:?}", state);
        }
        self.state = state;
        self.publish();
    }

    fn publish(&mut self) {
        debug!("Publishing {:?} to {} observers", self.state, self.observers.len());
        let state = &self.state;
        self.observers.retain_mut(|(id, observer)| {
            let keep = observer(state);
            if !keep {
                debug!("Dropping observer {}", id);
            }
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(tapper: &mut Tapper) -> (SubscriptionId, Rc<RefCell<Vec<GameState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = tapper.subscribe(move |state| {
            sink.borrow_mut().push(state.clone());
            true
        });
        (id, seen)
    }

    #[test]
    fn new_subscriber_gets_current_state() {
        let mut tapper = Tapper::new();
        let (_, seen) = recording(&mut tapper);
        assert_eq!(*seen.borrow(), vec![GameState::Starting]);
    }

    #[test]
    fn start_publishes_tie() {
        let mut tapper = Tapper::new();
        let (_, seen) = recording(&mut tapper);
        tapper.start();
        assert_eq!(seen.borrow().last(), Some(&GameState::tied()));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn taps_before_start_are_ignored() {
        let mut tapper = Tapper::new();
        let (_, seen) = recording(&mut tapper);
        tapper.tap(Player::One);
        tapper.tap(Player::Two);
        assert_eq!(tapper.state(), &GameState::Starting);
        assert!(tapper.counts().is_empty());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn repeated_restart_at_tie_publishes_once() {
        let mut tapper = Tapper::new();
        tapper.start();
        let (_, seen) = recording(&mut tapper);
        tapper.restart();
        tapper.restart();
        assert_eq!(*seen.borrow(), vec![GameState::tied()]);
    }

    #[test]
    fn restart_mid_game_returns_to_tie() {
        let mut tapper = Tapper::new();
        tapper.start();
        for _ in 0..7 {
            tapper.tap(Player::Two);
        }
        tapper.restart();
        assert_eq!(tapper.state(), &GameState::tied());
        assert_eq!(tapper.counts()[&Player::Two], 0);
    }

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let mut tapper = Tapper::new();
        let (id, seen) = recording(&mut tapper);
        assert!(tapper.unsubscribe(id));
        assert!(!tapper.unsubscribe(id));
        tapper.start();
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(tapper.observer_count(), 0);
    }

    #[test]
    fn observer_returning_false_is_dropped() {
        let mut tapper = Tapper::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let id = tapper.subscribe(move |_| {
            *counter.borrow_mut() += 1;
            let count = *counter.borrow();
            count < 2
        });
        tapper.start();
        assert_eq!(tapper.observer_count(), 0);
        assert!(!tapper.unsubscribe(id));
        tapper.tap(Player::One);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn observer_gone_on_subscribe_is_not_registered() {
        let mut tapper = Tapper::new();
        tapper.subscribe(|_| false);
        assert_eq!(tapper.observer_count(), 0);
    }

    #[test]
    fn taps_after_finish_keep_counting() {
        let mut tapper = Tapper::new();
        tapper.start();
        for _ in 0..25 {
            tapper.tap(Player::One);
        }
        tapper.tap(Player::One);
        assert_eq!(
            tapper.state(),
            &GameState::Finished {
                winner: Some(Player::One),
                winner_score: 26,
                loser_score: 0,
            }
        );
    }
}
