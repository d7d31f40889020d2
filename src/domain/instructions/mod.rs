//! Instruction builder.
//!
//! Renders the system prompt the external agent runtime installs before
//! each counterpart turn. Callers decide when to re-render; the builder
//! itself holds no state.

mod builder;
mod templates;

pub use builder::{build_instructions, render_phase_guidance};
