use super::DataStore;
use crate::error::Result;
use crate::model::AddressBook;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    book: Option<AddressBook>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: Some(book),
            save_count: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn saved(&self) -> Option<&AddressBook> {
        self.book.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = Some(book.clone());
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{AddressBook, Birthday, Record};

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name);
            for phone in phones {
                record.add_phone(*phone);
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut record = Record::new(name);
            record.set_birthday(Birthday::parse(birthday).unwrap());
            self.book.add_record(record);
            self
        }
    }
}
