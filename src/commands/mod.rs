//! CLI commands

pub mod check;
pub mod generate;
pub mod list;
pub mod related;
