//! Two-player tapping race: a reducer turning tap counts into a publishable
//! game state, and an actor serializing commands against it.

pub mod console;
pub mod game;
pub mod models;
pub mod session;
