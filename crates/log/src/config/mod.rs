//! Configuration types
//!
//! - `base`: [`Config`], [`Format`]
//! - `writer`: [`WriterConfig`], [`DisplayConfig`]
//! - `presets`: development, production and env-driven setups

mod base;
mod presets;
mod writer;

pub use base::{Config, Format};
pub use writer::{DisplayConfig, WriterConfig};
