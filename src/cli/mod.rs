//! Command-line interface: argument definitions, handlers, and output
//! formatting.

pub mod commands;
pub mod handlers;
pub mod output;
