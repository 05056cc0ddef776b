//! Test helpers shared across Recollect crates.

pub mod memory;

pub use memory::{AddCall, FailingMemory, RecordingMemory, SearchCall, record};
