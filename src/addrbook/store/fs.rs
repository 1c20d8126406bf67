use super::DataStore;
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::{Birthday, Name, Phone, Record};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HEADER: [&str; 3] = ["Name", "Phones", "B-day"];

#[derive(Debug, Deserialize)]
struct ContactRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Phones", default)]
    phones: String,
    #[serde(rename = "B-day", default)]
    birthday: String,
}

/// Flat-file storage: one CSV file holding every contact.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    fn write_header_only(&self) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut writer = self.writer()?;
        writer.write_record(HEADER)?;
        writer.flush().map_err(BookError::Io)?;
        Ok(())
    }

    fn writer(&self) -> Result<csv::Writer<fs::File>> {
        Ok(csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(&self.path)?)
    }

    fn row_to_record(row: ContactRow, line: u64) -> Option<Record> {
        let name = match Name::new(row.name.trim()) {
            Ok(name) => name,
            Err(_) => {
                warn!(line, "Skipping row without a contact name");
                return None;
            }
        };
        let mut record = Record::new(name);

        match decode_phones(&row.phones) {
            Ok(phones) => record.phones = phones,
            Err(e) => warn!(line, contact = %record.name, "Dropping phones: {}", e),
        }

        let birthday = row.birthday.trim();
        if !birthday.is_empty() {
            match Birthday::parse(birthday) {
                Ok(b) => record.birthday = Some(b),
                Err(e) => warn!(line, contact = %record.name, "Dropping birthday: {}", e),
            }
        }

        Some(record)
    }
}

impl DataStore for CsvStore {
    fn ensure(&self) -> Result<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Creating contacts file");
            self.write_header_only()?;
        }
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        self.ensure()?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut book = AddressBook::new();
        for (i, row) in reader.deserialize::<ContactRow>().enumerate() {
            let line = i as u64 + 2;
            match row {
                Ok(row) => {
                    if let Some(record) = Self::row_to_record(row, line) {
                        book.upsert(record);
                    }
                }
                Err(e) => warn!(line, "Skipping unreadable row: {}", e),
            }
        }

        debug!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut writer = self.writer()?;
        writer.write_record(HEADER)?;
        for record in book.iter() {
            let birthday = record.birthday.map(|b| b.to_string()).unwrap_or_default();
            writer.write_record([
                record.name.as_str(),
                encode_phones(&record.phones).as_str(),
                birthday.as_str(),
            ])?;
        }
        writer.flush().map_err(BookError::Io)?;

        debug!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}

/// Renders phones as a list literal, e.g. `['+380931234567', '+380671112233']`.
fn encode_phones(phones: &[Phone]) -> String {
    let items: Vec<String> = phones.iter().map(|p| format!("'{}'", p)).collect();
    format!("[{}]", items.join(", "))
}

/// Parses a list literal of quoted phones. Any bad element rejects the whole list.
fn decode_phones(literal: &str) -> Result<Vec<Phone>> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Ok(Vec::new());
    }

    let inner = literal
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| BookError::InvalidPhoneFormat(literal.to_string()))?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|item| {
            let item = item.trim();
            let unquoted = item
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
                .or_else(|| item.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
                .ok_or_else(|| BookError::InvalidPhoneFormat(item.to_string()))?;
            Phone::parse(unquoted)
        })
        .collect()
}
