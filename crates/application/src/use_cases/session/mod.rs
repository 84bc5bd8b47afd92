pub mod command;
pub mod engine;

pub use command::SessionCommand;
pub use engine::{InteractiveSession, Transition, HELP_TEXT, PROMPT};
