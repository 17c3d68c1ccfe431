//! CLI command implementations

mod build;

pub use build::cmd_build;
