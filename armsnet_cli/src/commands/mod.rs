//! CLI subcommand implementations.

pub mod graph;
pub mod raw;
pub mod registers;
pub mod tiv;
