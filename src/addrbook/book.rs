//! The in-memory contact collection.
//!
//! Records are kept in insertion order and addressed by their exact name.
//! Alphabetical order only matters for listing, see [`AddressBook::sorted`].

use crate::error::{BookError, Result};
use crate::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Inserts a record, replacing any existing record with the same name in place.
    pub fn upsert(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.name.as_str() == name)
            .ok_or_else(|| BookError::UnknownContact(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.name.as_str() == name)
            .ok_or_else(|| BookError::UnknownContact(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .position(name)
            .ok_or_else(|| BookError::UnknownContact(name.to_string()))?;
        Ok(self.records.remove(pos))
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records ordered by name.
    pub fn sorted(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.iter().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.upsert(record);
        }
        book
    }
}
