//! Configuration model for tflock-patch.
//!
//! This module defines the Config struct that describes which lock record to
//! patch and how to reach it. Values come from three layers, later layers
//! winning: built-in defaults, an optional YAML file, and command-line flags.
//! Unknown YAML fields are ignored for forward compatibility.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, ConfigOverrides};
