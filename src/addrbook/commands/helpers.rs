use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::{Name, Record};

/// Resolves a typed name to an existing record.
pub fn existing<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    let name = Name::new(name)?;
    book.get(name.as_str())
}

pub fn existing_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    let name = Name::new(name)?;
    book.get_mut(name.as_str())
}

/// Converts a 1-based position typed by the user into an index into `len` items.
pub fn position_to_index(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        return Err(BookError::InvalidPosition);
    }
    Ok(position - 1)
}
