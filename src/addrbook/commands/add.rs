use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone, Record};

pub fn run(book: &mut AddressBook, name: Option<&str>, phone: Option<&str>) -> Result<CmdResult> {
    let name = match name.map(Name::new) {
        Some(Ok(name)) => name,
        _ => {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(
                "Try again. Enter contact name you want to add.",
            )))
        }
    };

    if book.contains(name.as_str()) {
        return Ok(
            CmdResult::default().with_message(CmdMessage::warning("This contact already exists."))
        );
    }

    let phone = phone.map(Phone::parse).transpose()?;
    let message = match &phone {
        Some(phone) => format!("{} with {} has been added to the phonebook.", name, phone),
        None => format!("{} has been added to the phonebook.", name),
    };

    let mut record = Record::new(name);
    if let Some(phone) = phone {
        record.add_phone(phone);
    }
    book.upsert(record.clone());

    Ok(CmdResult::default()
        .with_affected(vec![record])
        .with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    #[test]
    fn adds_contact_with_normalized_phone() {
        let mut book = AddressBook::new();
        let result = run(&mut book, Some("John"), Some("0931234567")).unwrap();

        assert!(result.changed());
        assert_eq!(
            result.messages[0].content,
            "John with +380931234567 has been added to the phonebook."
        );
        let john = book.get("John").unwrap();
        assert_eq!(john.phones[0].as_str(), "+380931234567");
    }

    #[test]
    fn adds_contact_without_phone() {
        let mut book = AddressBook::new();
        let result = run(&mut book, Some("Ann"), None).unwrap();

        assert_eq!(result.messages[0].content, "Ann has been added to the phonebook.");
        assert!(book.get("Ann").unwrap().phones.is_empty());
    }

    #[test]
    fn rejects_duplicate_name() {
        let mut book = AddressBook::new();
        run(&mut book, Some("John"), None).unwrap();
        let result = run(&mut book, Some("John"), Some("0931234567")).unwrap();

        assert!(!result.changed());
        assert_eq!(result.messages[0].content, "This contact already exists.");
        assert!(book.get("John").unwrap().phones.is_empty());
    }

    #[test]
    fn asks_for_a_name_when_missing() {
        let mut book = AddressBook::new();
        let result = run(&mut book, None, None).unwrap();

        assert!(!result.changed());
        assert_eq!(
            result.messages[0].content,
            "Try again. Enter contact name you want to add."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn bad_phone_adds_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, Some("John"), Some("12345")).unwrap_err();

        assert!(matches!(err, BookError::InvalidPhoneFormat(_)));
        assert!(book.is_empty());
    }
}
