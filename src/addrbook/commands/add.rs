use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

use super::helpers::name_and_phones;

pub const USAGE: &str = "Give me name and phone please.";

/// `add <name> <phone>...`: creates the contact if needed and appends phones.
pub fn run(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let (name, phones) = name_and_phones(args, USAGE)?;

    let (record, created) = book.get_or_insert(name);
    for phone in phones {
        record.add_phone(phone.as_str());
    }

    let message = if created {
        "Contact added."
    } else {
        "Contact updated."
    };
    Ok(CmdResult::with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrBookError;
    use crate::store::memory::fixtures::BookFixture;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn adds_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&args(&["Alice", "1234567890"]), &mut book).unwrap();
        assert_eq!(result.text(), "Contact added.");
        assert_eq!(book.find("Alice").unwrap().phones, ["1234567890"]);
    }

    #[test]
    fn appends_to_existing_contact() {
        let mut book = BookFixture::new()
            .with_contact("Alice", &["1234567890"])
            .book;
        let result = run(&args(&["Alice", "0987654321", "1234567890"]), &mut book).unwrap();
        assert_eq!(result.text(), "Contact updated.");
        assert_eq!(
            book.find("Alice").unwrap().phones,
            ["1234567890", "0987654321", "1234567890"]
        );
    }

    #[test]
    fn rejects_missing_phone() {
        let mut book = AddressBook::new();
        match run(&args(&["Alice"]), &mut book) {
            Err(AddrBookError::Validation(msg)) => assert_eq!(msg, USAGE),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(book.is_empty());
    }

    #[test]
    fn invalid_phone_leaves_book_untouched() {
        let mut book = AddressBook::new();
        let err = run(&args(&["Alice", "1234567890", "12345"]), &mut book).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Phone number should contain exactly 10 digits."
        );
        assert!(book.find("Alice").is_none());
    }
}
