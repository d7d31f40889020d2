//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session record sinks (in-memory, file)
//! - `character` - Character profiles loaded from YAML files

pub mod character;
pub mod storage;

pub use character::{load_character, CharacterLoadError};
pub use storage::{FileRecordSink, InMemoryRecordSink};
