//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! address book operations, whatever the UI.
//!
//! The facade owns the [`AddressBook`] for its whole lifetime: it is loaded from
//! the [`DataStore`] when the api is opened and written back by
//! [`AddressBookApi::save`]. Nothing in between touches storage.
//!
//! The API explicitly avoids business logic (that belongs in `commands/*.rs`)
//! and terminal I/O (that belongs in the CLI).
//!
//! ## Generic Over DataStore
//!
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::AddressBook;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use log::debug;

pub const GREETING: &str = "How can I help you?";

pub struct AddressBookApi<S: DataStore> {
    store: S,
    book: AddressBook,
}

impl<S: DataStore> AddressBookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        debug!("address book opened with {} contact(s)", book.len());
        Ok(Self { store, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hello(&self) -> CmdResult {
        CmdResult::with_message(CmdMessage::info(GREETING))
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::add::run(args, &mut self.book)
    }

    pub fn change_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::change::run(args, &mut self.book)
    }

    pub fn show_phone(&self, args: &[String]) -> Result<CmdResult> {
        commands::phone::run(args, &self.book)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn add_birthday(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::birthday::add(args, &mut self.book)
    }

    pub fn show_birthday(&self, args: &[String]) -> Result<CmdResult> {
        commands::birthday::show(args, &self.book)
    }

    /// Upcoming birthdays relative to the local calendar date.
    pub fn birthdays(&self) -> Result<CmdResult> {
        self.birthdays_from(Local::now().date_naive())
    }

    pub fn birthdays_from(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::upcoming::run(&self.book, today)
    }

    /// Writes the whole book back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrBookError;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::InMemoryStore;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn open_loads_existing_book() {
        let book = BookFixture::new()
            .with_contact("Alice", &["1234567890"])
            .book;
        let api = AddressBookApi::open(InMemoryStore::with_book(book)).unwrap();
        assert_eq!(api.book().len(), 1);
    }

    #[test]
    fn scenario_add_update_phone() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        assert_eq!(
            api.show_phone(&args(&["Alice"])).unwrap().text(),
            "Alice not found in the address book."
        );
        assert_eq!(
            api.add_contact(&args(&["Alice", "1234567890"]))
                .unwrap()
                .text(),
            "Contact added."
        );
        assert_eq!(
            api.add_contact(&args(&["Alice", "0987654321"]))
                .unwrap()
                .text(),
            "Contact updated."
        );
        assert_eq!(
            api.show_phone(&args(&["Alice"])).unwrap().text(),
            "Alice phone numbers: 1234567890, 0987654321"
        );
    }

    #[test]
    fn scenario_birthday() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        api.add_contact(&args(&["Alice", "1234567890"])).unwrap();
        assert_eq!(
            api.add_birthday(&args(&["Alice", "15.03.1990"]))
                .unwrap()
                .text(),
            "Birthday added for Alice."
        );
        assert_eq!(
            api.show_birthday(&args(&["Alice"])).unwrap().text(),
            "Alice birthday: 15.03.1990"
        );
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(
            api.birthdays_from(today).unwrap().text(),
            "Upcoming birthdays:\nAlice birthday: 15.03.1990"
        );
    }

    #[test]
    fn validation_errors_do_not_mutate() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        let err = api.add_contact(&args(&["Alice", "123"])).unwrap_err();
        assert!(matches!(err, AddrBookError::Validation(_)));
        assert!(api.book().is_empty());
    }

    #[test]
    fn save_writes_book_to_store() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        api.add_contact(&args(&["Alice", "1234567890"])).unwrap();
        assert_eq!(api.store().save_count(), 0);

        api.save().unwrap();
        assert_eq!(api.store().save_count(), 1);
        let saved = api.store().saved().unwrap();
        assert_eq!(saved.find("Alice").unwrap().phones, ["1234567890"]);
    }

    #[test]
    fn hello_greets() {
        let api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        assert_eq!(api.hello().text(), GREETING);
    }
}
