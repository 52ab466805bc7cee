//! CLI command implementations.

pub mod common;
pub mod optimize;
pub mod show;
pub mod validate;
pub mod version;
