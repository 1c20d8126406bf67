//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the address book and wherever it
//! is persisted. Storage is only read at startup; afterwards the in-memory
//! [`AddressBook`] is authoritative and is written back whole after every change.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production flat-file storage
//!   - One CSV file with the header `Name,Phones,B-day`
//!   - Phones stored as a list literal: `['+380931234567', '+380671112233']`
//!   - Birthdays stored as `dd.mm` or `dd.mm.yyyy`, empty when unset
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert a command flushed
//!
//! ## Storage Format
//!
//! ```text
//! Name,Phones,B-day
//! John,['+380931234567'],15.03
//! Ann,"['+380671112233', '+380501234567']",01.12.1990
//! Bob,[],
//! ```
//!
//! Every save truncates and regenerates the file. Rows that fail to parse are
//! degraded field by field instead of failing the whole load.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait DataStore {
    /// Make sure the backing storage exists, creating an empty one if needed.
    fn ensure(&self) -> Result<()>;

    /// Read the whole book. Missing storage is created and yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Overwrite storage with the given book.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
