//! Terminal and JSON output for the CLI.

pub mod context;
pub mod json;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod views;
