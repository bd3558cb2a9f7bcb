pub mod commands;
pub mod view;

pub use commands::{Command, CommandError};
pub use view::ConsoleView;
