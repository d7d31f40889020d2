//! Storage Adapters
//!
//! Implementations of the SessionRecordSink port.
//!
//! ## Available Adapters
//!
//! - **FileRecordSink** - Transcript as JSON lines, report as YAML, one directory per session
//! - **InMemoryRecordSink** - Keeps records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRecordSink, InMemoryRecordSink};
//!
//! // Persistent: file-based records
//! let sink = FileRecordSink::new("./data/sessions");
//!
//! // Testing: in-memory records
//! let sink = InMemoryRecordSink::new();
//! ```

mod file_record_sink;
mod in_memory_record_sink;

pub use file_record_sink::FileRecordSink;
pub use in_memory_record_sink::InMemoryRecordSink;
