//! # CLI Layer
//!
//! The interactive shell around the library: the only place that reads stdin,
//! writes stdout and decides when to save.
//!
//! - `setup`: tokenizes a line and parses it with clap into a `ReplCommand`
//! - `commands`: the loop, dispatch to `AddressBookApi`, shutdown
//! - `render`: colored output of `CmdMessage`s

mod commands;
mod render;
mod setup;

pub use commands::run;
