//! # CLI Layer
//!
//! The prompt loop. This is the only place that reads stdin, writes stdout,
//! runs interactive sub-prompts and decides when the process ends.
//!
//! A [`Session`] is generic over its input and output so whole conversations
//! can be scripted in tests. Validation failures coming back from the API are
//! printed as fixed messages and the loop carries on; only a failed final save
//! ends the process with an error.

mod handlers;
mod print;
mod prompt;
mod setup;
mod shutdown;

use crate::args::Cli;
use addrbook::api::BookApi;
use addrbook::commands::CmdMessage;
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::parser::{parse_line, Input};
use addrbook::store::fs::CsvStore;
use addrbook::store::DataStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use print::print_messages;
use shutdown::InterruptWatcher;

const COMMAND_PROMPT: &str = "Enter a command: ";
const UNSUPPORTED: &str = "Command is not supported. Try again.";
const FAREWELL: &str = "Good bye!";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = setup::init_logging(cli.verbose) {
        eprintln!("Logging disabled: {}", e);
    }

    let config = setup::load_config(&cli);
    let store = CsvStore::new(setup::contacts_path(&config));
    info!(path = %store.path().display(), "Opening address book");

    let api = BookApi::open(store.clone())?;
    let watcher = InterruptWatcher::start(api.shared_book(), store).map_err(BookError::Io)?;

    let stdin = io::stdin();
    let mut session = Session::new(api, config, stdin.lock(), io::stdout());
    let outcome = session.run();

    if let Some(watcher) = watcher {
        watcher.stop();
    }
    outcome
}

pub(crate) struct Session<S: DataStore, R: BufRead, W: Write> {
    api: BookApi<S>,
    config: BookConfig,
    input: R,
    out: W,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub(crate) fn new(api: BookApi<S>, config: BookConfig, input: R, out: W) -> Self {
        Self {
            api,
            config,
            input,
            out,
            today: local_today,
        }
    }

    /// Runs until an exit phrase or end of input, saving the book on the way out.
    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            if let Err(e) = self.api.refresh() {
                warn!("Could not re-create contacts file: {}", e);
            }

            let Some(line) = self.read_line(COMMAND_PROMPT)? else {
                writeln!(self.out)?;
                return self.farewell();
            };

            match parse_line(&line) {
                Input::Command { command, args } => {
                    if let Err(e) = self.dispatch(command, &args) {
                        self.report(e)?;
                    }
                }
                Input::Exit => return self.farewell(),
                Input::Unsupported => writeln!(self.out, "{}", UNSUPPORTED.yellow())?,
            }
        }
    }

    fn farewell(&mut self) -> Result<()> {
        self.api.save()?;
        writeln!(self.out, "{}", FAREWELL)?;
        info!("Session ended");
        Ok(())
    }

    fn report(&mut self, error: BookError) -> Result<()> {
        if !error.is_validation() {
            warn!("Command failed: {}", error);
        }
        print_messages(&mut self.out, &[CmdMessage::error(error.user_message())])?;
        Ok(())
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[cfg(test)]
    fn into_parts(self) -> (BookApi<S>, W) {
        (self.api, self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook::model::{Name, Phone, Record};
    use addrbook::store::memory::InMemoryStore;
    use std::io::Cursor;

    pub(super) fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    pub(super) fn contact(name: &str, phones: &[&str]) -> Record {
        phones
            .iter()
            .fold(Record::new(Name::new(name).unwrap()), |record, phone| {
                record.with_phone(Phone::parse(phone).unwrap())
            })
    }

    pub(super) fn store_of(records: Vec<Record>) -> InMemoryStore {
        InMemoryStore::with_book(records.into_iter().collect())
    }

    /// `Contact 01`, `Contact 02`, ... each with one phone.
    pub(super) fn numbered_store(count: usize) -> InMemoryStore {
        store_of(
            (1..=count)
                .map(|i| contact(&format!("Contact {:02}", i), &[format!("0{:09}", i).as_str()]))
                .collect(),
        )
    }

    /// Runs a scripted session and returns the store and everything printed.
    pub(super) fn converse(store: InMemoryStore, script: &str) -> (InMemoryStore, String) {
        converse_with(store, BookConfig::default(), script)
    }

    pub(super) fn converse_with(
        store: InMemoryStore,
        config: BookConfig,
        script: &str,
    ) -> (InMemoryStore, String) {
        let api = BookApi::open(store).unwrap();
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut session = Session::new(api, config, input, Vec::new()).with_today(fixed_today);
        session.run().unwrap();
        let (api, out) = session.into_parts();
        (api.store().clone(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_phrase_saves_and_says_goodbye() {
        let (store, out) = converse(InMemoryStore::new(), "hello\ngood bye\n");
        assert!(out.contains("Hi. How can I help you?"));
        assert!(out.ends_with("Good bye!\n"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let (store, out) = converse(InMemoryStore::new(), "add John\n");
        assert!(out.contains("John has been added to the phonebook."));
        assert!(out.contains("Good bye!"));
        // once for the add, once on the way out
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn unsupported_commands_keep_the_loop_going() {
        let (_, out) = converse(InMemoryStore::new(), "dance\nhello\nexit\n");
        assert!(out.contains("Command is not supported. Try again."));
        assert!(out.contains("Hi. How can I help you?"));
    }

    #[test]
    fn validation_errors_are_reported_not_fatal() {
        let store = store_of(vec![contact("John", &[])]);
        let script = "\
            when bday Jane\n\
            add Ann 123\n\
            set bday John 2020-01-01\n\
            append phone\n\
            set bday John\n\
            hello\n\
            exit\n";
        let (store, out) = converse(store, script);

        assert!(out.contains("This contact doesn't exist in the phonebook."));
        assert!(out.contains(
            "Please enter correct phone number. Example: '+380123456789' or '0123456789'."
        ));
        assert!(out.contains("Invalid date format. Try 'dd.mm' or 'dd.mm.yyyy'"));
        assert!(out.contains("Please enter valid name."));
        assert!(out.contains("Please enter the birthday (dd.mm or dd.mm.yyyy) and try again."));
        assert!(out.contains("Hi. How can I help you?"));
        assert!(!store.saved().contains("Ann"));
    }

    #[test]
    fn invalid_utf8_does_not_end_the_session() {
        let api = BookApi::open(InMemoryStore::new()).unwrap();
        let input = Cursor::new(b"add John\nadd \xff\xfe\nhello\nexit\n".to_vec());
        let mut session = Session::new(api, BookConfig::default(), input, Vec::new());
        session.run().unwrap();

        let (api, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Hi. How can I help you?"));
        assert!(out.ends_with("Good bye!\n"));
        assert!(api.store().saved().contains("John"));
    }

    #[test]
    fn prompt_is_shown_for_every_command() {
        let (_, out) = converse(InMemoryStore::new(), "hello\nexit\n");
        assert_eq!(out.matches(COMMAND_PROMPT).count(), 2);
    }
}
