//! Services shared by the library and the `foo-greet` binary.
//!
//! - config: GreeterConfig and the cache/log directory layout

pub mod config;

pub use config::{load_config, GreeterConfig};
