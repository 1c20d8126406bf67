use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    book: AddressBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book, saves: 0 }
    }

    /// The book as of the last save.
    pub fn saved(&self) -> &AddressBook {
        &self.book
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn ensure(&self) -> Result<()> {
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Name, Phone, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(mut self, record: Record) -> Self {
            self.store.book.upsert(record);
            self
        }

        /// Adds `count` contacts named `Contact 01`, `Contact 02`, ...
        pub fn with_contacts(self, count: usize) -> Self {
            (1..=count).fold(self, |fixture, i| {
                let phone = Phone::parse(&format!("0{:09}", i)).unwrap();
                fixture.push(
                    Record::new(Name::new(format!("Contact {:02}", i)).unwrap()).with_phone(phone),
                )
            })
        }

        pub fn with_contact(self, name: &str, phones: &[&str]) -> Self {
            let record = phones.iter().fold(
                Record::new(Name::new(name).unwrap()),
                |record, phone| record.with_phone(Phone::parse(phone).unwrap()),
            );
            self.push(record)
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
