//! Subcommand implementations

pub mod browse;
pub mod list;
pub mod page;
pub mod tags;
