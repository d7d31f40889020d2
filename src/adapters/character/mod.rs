//! Character Adapters
//!
//! Custom personas supplied as YAML files, as an alternative to the
//! built-in presets.

mod yaml_loader;

pub use yaml_loader::{load_character, parse_character, CharacterLoadError};
