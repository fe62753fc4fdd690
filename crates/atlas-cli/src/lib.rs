//! CLI library components for the builder atlas.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod tables;
