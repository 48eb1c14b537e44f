//! JSON helpers for the documents Tukija keeps on disk.
//!
//! Token files are written pretty-printed with a trailing newline so a user
//! inspecting `~/.credentials` sees something readable.

mod json;

pub use json::*;
