use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Contact not found: {0}")]
    UnknownContact(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhoneFormat(String),

    #[error("Invalid date: {0}")]
    InvalidDateFormat(String),

    #[error("Missing contact name")]
    MissingName,

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Position out of range")]
    InvalidPosition,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl BookError {
    /// The fixed message shown at the prompt for this failure.
    pub fn user_message(&self) -> String {
        match self {
            BookError::UnknownContact(_) => {
                "This contact doesn't exist in the phonebook.".to_string()
            }
            BookError::InvalidPhoneFormat(_) => {
                "Please enter correct phone number. Example: '+380123456789' or '0123456789'."
                    .to_string()
            }
            BookError::InvalidDateFormat(_) => {
                "Invalid date format. Try 'dd.mm' or 'dd.mm.yyyy'".to_string()
            }
            BookError::MissingName => "Please enter valid name.".to_string(),
            BookError::MissingArgument(what) => format!("Please enter {} and try again.", what),
            BookError::InvalidPosition => "Wrong position. Please try again.".to_string(),
            other => format!("Error: {}", other),
        }
    }

    /// Validation failures are answered at the prompt; everything else is infrastructure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookError::UnknownContact(_)
                | BookError::InvalidPhoneFormat(_)
                | BookError::InvalidDateFormat(_)
                | BookError::MissingName
                | BookError::MissingArgument(_)
                | BookError::InvalidPosition
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_fixed_messages() {
        assert_eq!(
            BookError::UnknownContact("Bob".into()).user_message(),
            "This contact doesn't exist in the phonebook."
        );
        assert_eq!(
            BookError::InvalidDateFormat("1.1.1.1".into()).user_message(),
            "Invalid date format. Try 'dd.mm' or 'dd.mm.yyyy'"
        );
        assert_eq!(
            BookError::MissingArgument("the birthday").user_message(),
            "Please enter the birthday and try again."
        );
        assert!(BookError::MissingName.is_validation());
    }

    #[test]
    fn infrastructure_errors_carry_detail() {
        let err = BookError::Store("disk full".into());
        assert!(!err.is_validation());
        assert_eq!(err.user_message(), "Error: Store error: disk full");
    }
}
