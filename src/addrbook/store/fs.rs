use super::DataStore;
use crate::error::{AddrBookError, Result};
use crate::model::{AddressBook, Birthday, Record};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    contacts: Vec<StoredContact>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

fn encode(book: &AddressBook) -> StoredBook {
    StoredBook {
        version: FORMAT_VERSION,
        contacts: book
            .records()
            .map(|record| StoredContact {
                name: record.name.clone(),
                phones: record.phones.clone(),
                birthday: record.birthday.map(|b| b.to_string()),
            })
            .collect(),
    }
}

fn decode(stored: StoredBook) -> Result<AddressBook> {
    if stored.version != FORMAT_VERSION {
        return Err(AddrBookError::Store(format!(
            "Unsupported data file version {} (expected {})",
            stored.version, FORMAT_VERSION
        )));
    }

    stored
        .contacts
        .into_iter()
        .map(|contact| {
            let mut record = Record::new(contact.name);
            record.replace_phones(contact.phones);
            if let Some(text) = contact.birthday {
                let birthday = text.parse::<Birthday>().map_err(|_| {
                    AddrBookError::Store(format!(
                        "Invalid birthday {:?} stored for {}",
                        text, record.name
                    ))
                })?;
                record.set_birthday(birthday);
            }
            Ok(record)
        })
        .collect()
}

/// Stores the whole book as one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrBookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!("no data file at {}, starting empty", self.path.display());
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AddrBookError::Io)?;
        let stored: StoredBook =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        let book = decode(stored)?;
        debug!(
            "loaded {} contact(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(&encode(book)).map_err(AddrBookError::Serialization)?;
        fs::write(&self.path, content).map_err(AddrBookError::Io)?;
        debug!("saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}
