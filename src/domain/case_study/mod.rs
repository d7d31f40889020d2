//! Case-study domain module.
//!
//! Reference customer stories the salesperson can cite, and detection of
//! which ones were mentioned in an utterance.

mod catalog;

pub use catalog::{all, detect_mentions, get, search, summary, CaseStudy};
