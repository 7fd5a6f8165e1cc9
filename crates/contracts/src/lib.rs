//! # Contracts
//!
//! Shared data structures between the loader, the CLI and downstream consumers.
//! All workspace crates depend on this crate, reverse dependencies are prohibited.
//!
//! ## Pipeline Model
//! - A `PipelineDescriptor` is an ordered, duplicate-free list of `PluginReference`
//! - Plugin options are opaque JSON values and are never interpreted here

mod descriptor;
mod environment;
mod error;
mod plugin;

pub use descriptor::*;
pub use environment::Environment;
pub use error::*;
pub use plugin::PluginReference;
