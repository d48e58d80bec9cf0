use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

/// `all`: one `<name> Phones: ...` line per contact, in insertion order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let lines: Vec<String> = book.records().map(|record| record.to_string()).collect();
    Ok(CmdResult::with_message(CmdMessage::info(lines.join("\n"))))
}
