//! Text storage and edit history for runedit.
//!
//! Provides a gap buffer addressed in Unicode scalar values, together with
//! a time-windowed undo/redo history of position-addressed edits and a
//! selection over char offsets.

mod gap;
mod history;
mod selection;

pub use gap::{GapBuffer, DEFAULT_GAP_SIZE};
pub use history::{
    EditKind, EditOperation, History, DEFAULT_MAX_DEPTH, DEFAULT_MERGE_TIMEOUT,
};
pub use selection::Selection;
