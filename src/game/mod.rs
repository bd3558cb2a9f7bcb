pub mod reducer;
pub mod tapper;
pub mod utils;

pub use reducer::{derive_state, TapCounts, REQUIRED_TAPS_TO_WIN};
pub use tapper::Tapper;
