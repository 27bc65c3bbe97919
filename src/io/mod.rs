//! Plain-text problem input and assignment output.
//!
//! - [`read_problem`] — Parses the whitespace-separated integer grammar
//! - [`write_assignment`] — Emits one `count id id …` line per vehicle

mod text;

pub use text::{read_problem, write_assignment};
