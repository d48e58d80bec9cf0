//! # Storage Layer
//!
//! The address book is loaded once at startup and written back wholesale on
//! orderly shutdown. The [`DataStore`] trait keeps that bracket independent of
//! where the bytes end up.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON file
//!   - A missing file is the first-run case and loads as an empty book
//!   - Parent directories are created on save
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Alice", "phones": ["1234567890"], "birthday": "15.03.1990" }
//!   ]
//! }
//! ```
//!
//! Records are converted to and from a dedicated on-disk type, so internal
//! changes to [`AddressBook`] do not leak into the file format.

use crate::error::Result;
use crate::model::AddressBook;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait DataStore {
    /// Load the whole book. Absence of stored data yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored data with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
