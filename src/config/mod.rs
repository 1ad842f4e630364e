//! Runtime configuration.
//!
//! Settings come from an optional TOML file and a couple of environment
//! overrides, falling back to struct defaults.

mod load;
mod schema;

pub use load::{ConfigError, default_config_path, resolve_config_path};
pub use schema::*;
