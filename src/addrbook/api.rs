//! # API Facade
//!
//! [`BookApi`] is the single entry point for address book operations. It owns
//! the in-memory book and the store, dispatches to `commands/*.rs`, and flushes
//! the whole book to storage after every command that changed it.
//!
//! The book sits behind a shared mutex so an interrupt handler can flush it
//! from another thread (see [`BookApi::shared_book`]). The lock is only held
//! for the duration of a single call and never while waiting for user input.
//!
//! ## Generic Over DataStore
//!
//! - Production: `BookApi<CsvStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Phone;
use crate::store::DataStore;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

pub type SharedBook = Arc<Mutex<AddressBook>>;

pub struct BookApi<S: DataStore> {
    store: S,
    book: SharedBook,
}

impl<S: DataStore> BookApi<S> {
    /// Loads the book from the store.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book: Arc::new(Mutex::new(book)),
        })
    }

    /// Re-creates the backing storage if it disappeared. The in-memory book is kept.
    pub fn refresh(&self) -> Result<()> {
        self.store.ensure()
    }

    pub fn greet(&self) -> CmdResult {
        commands::help::hello()
    }

    pub fn usage(&self) -> CmdResult {
        commands::help::usage()
    }

    pub fn add_contact(&mut self, name: Option<&str>, phone: Option<&str>) -> Result<CmdResult> {
        let mut book = self.book.lock();
        let result = commands::add::run(&mut book, name, phone)?;
        persist(&mut self.store, &book, &result)?;
        Ok(result)
    }

    pub fn append_phone(&mut self, name: &str, phone: Option<&str>) -> Result<CmdResult> {
        let mut book = self.book.lock();
        let result = commands::phones::append(&mut book, name, phone)?;
        persist(&mut self.store, &book, &result)?;
        Ok(result)
    }

    pub fn phone_choices(&self, name: &str) -> Result<CmdResult> {
        commands::phones::choices(&self.book.lock(), name)
    }

    pub fn change_phone(&mut self, name: &str, position: usize, phone: Phone) -> Result<CmdResult> {
        let mut book = self.book.lock();
        let result = commands::phones::replace(&mut book, name, position, phone)?;
        persist(&mut self.store, &book, &result)?;
        Ok(result)
    }

    pub fn remove_phone(&mut self, name: &str, position: usize) -> Result<CmdResult> {
        let mut book = self.book.lock();
        let result = commands::phones::remove(&mut book, name, position)?;
        persist(&mut self.store, &book, &result)?;
        Ok(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let mut book = self.book.lock();
        let result = commands::delete::run(&mut book, name)?;
        persist(&mut self.store, &book, &result)?;
        Ok(result)
    }

    pub fn show_phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::show(&self.book.lock(), name)
    }

    pub fn set_birthday(&mut self, name: &str, date: Option<&str>) -> Result<CmdResult> {
        let mut book = self.book.lock();
        let result = commands::birthday::set(&mut book, name, date)?;
        persist(&mut self.store, &book, &result)?;
        Ok(result)
    }

    pub fn days_to_birthday(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::when(&self.book.lock(), name, today)
    }

    pub fn find(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.book.lock(), term)
    }

    pub fn list_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.book.lock())
    }

    /// Writes the whole book to storage unconditionally.
    pub fn save(&mut self) -> Result<()> {
        let book = self.book.lock();
        self.store.save(&book)
    }

    /// Handle to the in-memory book for flushing from outside the command loop.
    pub fn shared_book(&self) -> SharedBook {
        Arc::clone(&self.book)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn persist<S: DataStore>(store: &mut S, book: &AddressBook, result: &CmdResult) -> Result<()> {
    if result.changed() {
        debug!(contacts = book.len(), "Flushing address book");
        store.save(book)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> BookApi<InMemoryStore> {
        BookApi::open(
            StoreFixture::new()
                .with_contact("John", &["0931234567"])
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn open_loads_from_store() {
        let api = api();
        assert_eq!(api.list_all().unwrap().listed.len(), 1);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn mutations_flush_immediately() {
        let mut api = api();
        api.add_contact(Some("Ann"), Some("0671112233")).unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert!(api.store().saved().contains("Ann"));

        api.append_phone("Ann", Some("0501234567")).unwrap();
        api.set_birthday("Ann", Some("01.12")).unwrap();
        api.change_phone("Ann", 1, Phone::parse("0991234567").unwrap())
            .unwrap();
        api.remove_phone("Ann", 2).unwrap();
        api.delete_contact("John").unwrap();
        assert_eq!(api.store().save_count(), 6);

        let saved = api.store().saved();
        assert!(!saved.contains("John"));
        let ann = saved.get("Ann").unwrap();
        assert_eq!(ann.phones.len(), 1);
        assert_eq!(ann.phones[0].as_str(), "+380991234567");
        assert_eq!(ann.birthday.unwrap().to_string(), "01.12");
    }

    #[test]
    fn rejected_commands_do_not_flush() {
        let mut api = api();
        api.add_contact(Some("John"), None).unwrap();
        api.append_phone("John", Some("+380931234567")).unwrap();
        assert!(api.add_contact(Some("Ann"), Some("123")).is_err());
        assert!(matches!(
            api.delete_contact("Nobody"),
            Err(BookError::UnknownContact(_))
        ));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn reads_do_not_flush() {
        let api = api();
        api.show_phones("John").unwrap();
        api.find("John").unwrap();
        api.phone_choices("John").unwrap();
        api.days_to_birthday("John", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .unwrap();
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn shared_book_sees_changes() {
        let mut api = api();
        let shared = api.shared_book();
        api.add_contact(Some("Ann"), None).unwrap();
        assert!(shared.lock().contains("Ann"));
    }
}
