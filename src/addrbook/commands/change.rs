use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

use super::helpers::name_and_phones;

pub const USAGE: &str = "Give me name and new phone please.";

/// `change <name> <phone>...`: replaces the whole phone list of a known contact.
pub fn run(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let (name, phones) = name_and_phones(args, USAGE)?;

    let message = match book.find_mut(name) {
        Some(record) => {
            record.replace_phones(phones.to_vec());
            CmdMessage::success(format!("Phone number updated for {}.", name))
        }
        None => CmdMessage::warning(format!("{} not found in the address book.", name)),
    };
    Ok(CmdResult::with_message(message))
}
