use crate::error::{BookError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Year stored for birthdays entered without one (`dd.mm`).
pub const NO_YEAR: i32 = 1900;

const FULL_DATE_FORMAT: &str = "%d.%m.%Y";
const SHORT_DATE_FORMAT: &str = "%d.%m";

/// Contact name, the unique key of a record. Compared exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Blank names and the `_` placeholder are rejected.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() || value == "_" {
            return Err(BookError::MissingName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number in canonical `+380XXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Normalizes any input whose digits form a Ukrainian number.
    ///
    /// Everything but ASCII digits is ignored, so `(093) 123-45-67`,
    /// `0931234567`, `380931234567` and `+380931234567` all produce
    /// `+380931234567`.
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        let canonical = if digits.len() == 10 && digits.starts_with('0') {
            format!("+38{}", digits)
        } else if digits.len() == 12 && digits.starts_with("380") {
            format!("+{}", digits)
        } else {
            return Err(BookError::InvalidPhoneFormat(input.to_string()));
        };

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, with or without a known year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Accepts `dd.mm.yyyy` or `dd.mm`; the latter is stored with [`NO_YEAR`].
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let invalid = || BookError::InvalidDateFormat(input.to_string());

        let parsed = match input.rsplit_once('.') {
            Some((day_month, year)) if day_month.contains('.') => {
                // chrono's %Y takes any width and a sign
                if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                NaiveDate::parse_from_str(input, FULL_DATE_FORMAT)
            }
            _ => NaiveDate::parse_from_str(&format!("{}.{}", input, NO_YEAR), FULL_DATE_FORMAT),
        };
        parsed.map(Self).map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn has_year(&self) -> bool {
        self.0.year() != NO_YEAR
    }

    /// Days from `today` to the next occurrence of this month/day, 0 when it is today.
    ///
    /// February 29 falls on February 28 in non-leap years.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let this_year = self.occurrence_in(today.year())?;
        let next = if this_year < today {
            self.occurrence_in(today.year() + 1)?
        } else {
            this_year
        };
        Some((next - today).num_days())
    }

    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_year() {
            write!(f, "{}", self.0.format(FULL_DATE_FORMAT))
        } else {
            write!(f, "{}", self.0.format(SHORT_DATE_FORMAT))
        }
    }
}

/// One contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    /// Replaces the phone at a zero-based position, returning the old one.
    pub fn replace_phone(&mut self, position: usize, phone: Phone) -> Result<Phone> {
        let slot = self
            .phones
            .get_mut(position)
            .ok_or(BookError::InvalidPosition)?;
        Ok(std::mem::replace(slot, phone))
    }

    /// Removes the phone at a zero-based position, returning it.
    pub fn remove_phone(&mut self, position: usize) -> Result<Phone> {
        if position >= self.phones.len() {
            return Err(BookError::InvalidPosition);
        }
        Ok(self.phones.remove(position))
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Case-sensitive substring match against the name or any phone.
    pub fn matches(&self, term: &str) -> bool {
        self.name.as_str().contains(term) || self.phones.iter().any(|p| p.as_str().contains(term))
    }

    pub fn birthday_message(&self, today: NaiveDate) -> String {
        let name = &self.name;
        match self.birthday.and_then(|b| b.days_until(today)) {
            None => format!("{}'s b-day isn't set yet.", name),
            Some(0) => format!("Sing for {} a song, cuz' {}'s b-day is today!", name, name),
            Some(days) => format!("{}'s b-day in {} days.", name, days),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "{}: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ". Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
