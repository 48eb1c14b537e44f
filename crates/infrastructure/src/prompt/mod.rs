//! Terminal user prompt.

mod stdin;
mod terminal;

pub use stdin::{LineSource, StdinLines};
pub use terminal::TerminalPrompt;
