//! CLI library components for the DME analyzer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
