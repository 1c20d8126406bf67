use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// A slice of the alphabetical listing shown at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    pub total: usize,
    /// 1-based position of the first record on this page within the whole listing.
    pub first_position: usize,
    pub records: &'a [Record],
}

impl Page<'_> {
    pub fn is_last(&self) -> bool {
        self.number == self.total
    }
}

/// Every contact, ordered by name.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("The phonebook is empty.")));
    }
    let listed = book.sorted().into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed(listed))
}

/// Listings longer than `threshold` records are shown page by page.
pub fn needs_paging(count: usize, threshold: usize) -> bool {
    count > threshold
}

pub fn paginate(records: &[Record], page_size: usize) -> Vec<Page<'_>> {
    let page_size = page_size.max(1);
    let total = records.len().div_ceil(page_size);
    records
        .chunks(page_size)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i + 1,
            total,
            first_position: i * page_size + 1,
            records: chunk,
        })
        .collect()
}
