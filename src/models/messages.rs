use actix::{Message, Recipient};

use crate::models::{GameState, Player};

pub use crate::game::tapper::SubscriptionId;

/// Begin the first game of a session
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Start;

/// Reset both counts to zero and play again
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Restart;

/// A single tap attributed to one player
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Tap(pub Player);

/// Ask a session for its latest published state
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "GameState")]
pub struct GetState;

/// Register an observer; it immediately receives the current state
#[derive(Message)]
#[rtype(result = "SubscriptionId")]
pub struct Subscribe(pub Recipient<StateChanged>);

/// Remove an observer registered with [`Subscribe`]
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "bool")]
pub struct Unsubscribe(pub SubscriptionId);

/// Pushed to every observer whenever the published state changes
#[derive(Message, Debug, Clone, PartialEq)]
#[rtype(result = "()")]
pub struct StateChanged(pub GameState);

/// Stop a session; its observers receive nothing further
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Close;
