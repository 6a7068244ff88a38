//! Command implementations behind the `tgraph` binary.

pub mod commands;
