//! Command implementations.

mod drift;
mod info;
mod preset;
mod validate;

pub use drift::run_drift;
pub use info::run_info;
pub use preset::run_preset;
pub use validate::run_validate;
