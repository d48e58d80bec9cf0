use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

use super::helpers::require_args;

pub const USAGE: &str = "Give me name please.";

pub fn run(args: &[String], book: &AddressBook) -> Result<CmdResult> {
    require_args(args, 1, USAGE)?;
    let name = args[0].as_str();

    let message = if book.contains(name) {
        CmdMessage::info(book.format_phones(name))
    } else {
        CmdMessage::warning(book.format_phones(name))
    };
    Ok(CmdResult::with_message(message))
}
