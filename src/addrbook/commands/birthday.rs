use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Birthday};

use super::helpers::require_args;

pub const ADD_USAGE: &str = "Give me name and birthday please.";
pub const SHOW_USAGE: &str = "Give me name please.";

fn not_found(name: &str) -> CmdMessage {
    CmdMessage::warning(format!("{} not found in the address book.", name))
}

/// `add-birthday <name> <DD.MM.YYYY>`: sets (or overwrites) a known contact's birthday.
pub fn add(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    require_args(args, 2, ADD_USAGE)?;
    let name = args[0].as_str();

    let message = match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(args[1].parse::<Birthday>()?);
            CmdMessage::success(format!("Birthday added for {}.", name))
        }
        None => not_found(name),
    };
    Ok(CmdResult::with_message(message))
}

/// `show-birthday <name>`
pub fn show(args: &[String], book: &AddressBook) -> Result<CmdResult> {
    require_args(args, 1, SHOW_USAGE)?;
    let name = args[0].as_str();

    let message = match book.find(name) {
        Some(record) => CmdMessage::info(record.format_birthday()),
        None => not_found(name),
    };
    Ok(CmdResult::with_message(message))
}
