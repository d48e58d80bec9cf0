use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Birthday, Record};
use chrono::{Datelike, Days, NaiveDate};

pub const HEADER: &str = "Upcoming birthdays:";
pub const WINDOW_DAYS: u64 = 7;

/// `birthdays`: contacts whose birthday falls in `[today, today + 7 days)`.
///
/// `today` is passed in so callers decide the clock.
pub fn run(book: &AddressBook, today: NaiveDate) -> Result<CmdResult> {
    let horizon = today
        .checked_add_days(Days::new(WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let lines: Vec<String> = book
        .records()
        .filter(|record| is_upcoming(record, today, horizon))
        .map(Record::format_birthday)
        .collect();

    Ok(CmdResult::with_message(CmdMessage::info(format!(
        "{}\n{}",
        HEADER,
        lines.join("\n")
    ))))
}

/// Month and day of `birthday` placed in `year`.
///
/// 29 February falls back to 28 February in non-leap years.
fn in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    let date = birthday.date();
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}

fn is_upcoming(record: &Record, today: NaiveDate, horizon: NaiveDate) -> bool {
    let Some(birthday) = record.birthday else {
        return false;
    };
    let Some(this_year) = in_year(&birthday, today.year()) else {
        return false;
    };

    if this_year >= today {
        this_year < horizon
    } else {
        // Already passed this year; only late-December dates reach into January.
        in_year(&birthday, today.year() + 1).is_some_and(|next_year| next_year < horizon)
    }
}
