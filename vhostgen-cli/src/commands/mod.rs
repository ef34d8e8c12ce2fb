//! CLI command implementations.
//!
//! - `generate`: Build a vhost and print or save it

pub mod generate;

pub use generate::GenerateCommand;
