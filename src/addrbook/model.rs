//! Core data types: [`Birthday`], [`Record`] and the [`AddressBook`] that owns them.
//!
//! These are plain in-memory values. Nothing here touches the filesystem; the
//! on-disk shape lives in `store::fs` and is converted field by field.

use crate::error::{AddrBookError, Result};
use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Use DD.MM.YYYY";

/// A calendar date parsed from strict `DD.MM.YYYY` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(text: &str) -> Result<Self> {
        if !has_date_shape(text) {
            return Err(AddrBookError::validation(INVALID_DATE_MESSAGE));
        }
        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Birthday)
            .map_err(|_| AddrBookError::validation(INVALID_DATE_MESSAGE))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Birthday::parse(s)
    }
}

// chrono alone accepts unpadded fields ("1.3.1990"), so check the shape first.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// One contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Appends without validation; handlers check phone format beforehand.
    pub fn add_phone(&mut self, number: impl Into<String>) {
        self.phones.push(number.into());
    }

    pub fn replace_phones(&mut self, numbers: Vec<String>) {
        self.phones = numbers;
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn format_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("{} birthday: {}", self.name, birthday),
            None => format!("{} does not have a recorded birthday.", self.name),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Phones: {}", self.name, self.phones.join(", "))
    }
}

/// Contacts keyed by exact name, iterated in order of first insertion.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.records[i]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Inserts `record`, or merges it into the existing record of the same name.
    ///
    /// Merging appends the incoming phones (no dedup) and overwrites the
    /// birthday only when the incoming record carries one.
    pub fn add_record(&mut self, record: Record) {
        if let Some(&i) = self.index.get(&record.name) {
            let existing = &mut self.records[i];
            info!(
                "merging {} phone(s) into contact {}",
                record.phones.len(),
                existing.name
            );
            existing.phones.extend(record.phones);
            if let Some(birthday) = record.birthday {
                existing.set_birthday(birthday);
            }
        } else {
            info!("new contact {}", record.name);
            self.index.insert(record.name.clone(), self.records.len());
            self.records.push(record);
        }
    }

    /// Returns the record for `name`, creating an empty one if needed.
    /// The flag is true when the record was created by this call.
    pub fn get_or_insert(&mut self, name: &str) -> (&mut Record, bool) {
        let created = !self.contains(name);
        if created {
            self.add_record(Record::new(name));
        }
        let i = self.index[name];
        (&mut self.records[i], created)
    }

    pub fn format_phones(&self, name: &str) -> String {
        match self.find(name) {
            Some(record) => format!("{} phone numbers: {}", name, record.phones.join(", ")),
            None => format!("{} not found in the address book.", name),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
