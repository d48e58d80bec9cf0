//! # addrbook
//!
//! An address book library with an interactive shell on top. The library knows
//! nothing about terminals; the binary's `cli` module is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, binary only)                              │
//! │  - Reads lines, parses commands, prints colored messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook between load and save               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates arguments, mutates or queries the book         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Bad input (missing arguments, malformed phone or date) is
//! [`error::AddrBookError::Validation`]; callers print it and carry on.
//! Everything else is fatal to the session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One handler per command
//! - [`model`]: `Birthday`, `Record`, `AddressBook`
//! - [`store`]: Persistence
//! - [`config`]: `config.json` handling
//! - [`init`]: Path resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
