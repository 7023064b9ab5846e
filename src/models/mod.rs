pub mod entry;
pub mod mood;

pub use entry::{JournalEntry, NewEntry};
pub use mood::{Mood, Tone};
