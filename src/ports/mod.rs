//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRecordSink` - Where transcripts and evaluation reports go

mod session_record_sink;

pub use session_record_sink::{RecordSinkError, SessionRecordSink};
