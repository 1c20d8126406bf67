use super::print::{print_messages, print_page, print_phones, print_records};
use super::Session;
use addrbook::commands::list::{needs_paging, paginate};
use addrbook::commands::CmdResult;
use addrbook::error::{BookError, Result};
use addrbook::parser::Command;
use addrbook::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const CANCELLED: &str = "Exiting...";

fn arg(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str)
}

fn name_arg(args: &[String]) -> Result<&str> {
    arg(args, 0).ok_or(BookError::MissingName)
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub(super) fn dispatch(&mut self, command: Command, args: &[String]) -> Result<()> {
        debug!(%command, mutating = command.is_mutating(), ?args, "Dispatching");
        match command {
            Command::Hello => self.show(self.api.greet()),
            Command::Help => self.show(self.api.usage()),
            Command::ShowAll => self.handle_show_all(),
            Command::Add => {
                let result = self.api.add_contact(arg(args, 0), arg(args, 1))?;
                self.show(result)
            }
            Command::AppendPhone => {
                let result = self.api.append_phone(name_arg(args)?, arg(args, 1))?;
                self.show(result)
            }
            Command::ChangePhone => self.handle_change_phone(name_arg(args)?),
            Command::RemovePhone => self.handle_remove_phone(name_arg(args)?),
            Command::DelContact => {
                let result = self.api.delete_contact(name_arg(args)?)?;
                self.show(result)
            }
            Command::ShowPhones => {
                let result = self.api.show_phones(name_arg(args)?)?;
                print_messages(&mut self.out, &result.messages)?;
                print_phones(&mut self.out, &result.phones)?;
                Ok(())
            }
            Command::SetBday => {
                let result = self.api.set_birthday(name_arg(args)?, arg(args, 1))?;
                self.show(result)
            }
            Command::WhenBday => {
                let result = self.api.days_to_birthday(name_arg(args)?, (self.today)())?;
                self.show(result)
            }
            Command::Find => {
                let result = self.api.find(&args.join(" "))?;
                print_messages(&mut self.out, &result.messages)?;
                print_records(&mut self.out, &result.listed)?;
                Ok(())
            }
        }
    }

    fn show(&mut self, result: CmdResult) -> Result<()> {
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn handle_show_all(&mut self) -> Result<()> {
        let result = self.api.list_all()?;
        print_messages(&mut self.out, &result.messages)?;

        if !needs_paging(result.listed.len(), self.config.paginate_over) {
            print_records(&mut self.out, &result.listed)?;
            return Ok(());
        }

        for page in paginate(&result.listed, self.config.page_size) {
            print_page(&mut self.out, &page)?;
            if page.is_last() || !self.prompt_next_page()? {
                break;
            }
        }
        Ok(())
    }

    /// Lists the contact's phones and asks which one to act on.
    /// `None` when there is nothing to pick or the user backed out.
    fn pick_phone(&mut self, name: &str) -> Result<Option<usize>> {
        let choices = self.api.phone_choices(name)?;
        print_messages(&mut self.out, &choices.messages)?;
        if choices.phones.is_empty() {
            return Ok(None);
        }
        print_phones(&mut self.out, &choices.phones)?;

        let position = self.prompt_position(choices.phones.len())?;
        if position.is_none() {
            writeln!(self.out, "{}", CANCELLED)?;
        }
        Ok(position)
    }

    fn handle_change_phone(&mut self, name: &str) -> Result<()> {
        let Some(position) = self.pick_phone(name)? else {
            return Ok(());
        };
        let Some(phone) = self.prompt_phone(name)? else {
            writeln!(self.out, "{}", CANCELLED)?;
            return Ok(());
        };
        let result = self.api.change_phone(name, position, phone)?;
        self.show(result)
    }

    fn handle_remove_phone(&mut self, name: &str) -> Result<()> {
        let Some(position) = self.pick_phone(name)? else {
            return Ok(());
        };
        let result = self.api.remove_phone(name, position)?;
        self.show(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{contact, converse, converse_with, numbered_store, store_of};
    use addrbook::config::BookConfig;
    use addrbook::store::memory::InMemoryStore;

    #[test]
    fn add_then_query_birthday() {
        let script = "\
            add John 0931234567\n\
            when bday John\n\
            set bday John 15.03\n\
            when bday John\n\
            exit\n";
        let (store, out) = converse(InMemoryStore::new(), script);

        assert!(out.contains("John with +380931234567 has been added to the phonebook."));
        assert!(out.contains("John's b-day isn't set yet."));
        assert!(out.contains("Added birthday to John's record."));
        assert!(out.contains("John's b-day in 147 days."));

        let john = store.saved().get("John").unwrap();
        assert_eq!(john.phones[0].as_str(), "+380931234567");
    }

    #[test]
    fn chatter_before_the_command_is_ignored() {
        let (store, out) = converse(InMemoryStore::new(), "please add John\nexit\n");
        assert!(out.contains("John has been added to the phonebook."));
        assert!(store.saved().contains("John"));
    }

    #[test]
    fn change_phone_interactively() {
        let store = store_of(vec![contact("John", &["0931234567", "0671112233"])]);
        let script = "\
            change phone John\n\
            7\n\
            2\n\
            bad\n\
            0501234567\n\
            exit\n";
        let (store, out) = converse(store, script);

        assert!(out.contains("John phone numbers:"));
        assert!(out.contains("1. +380931234567"));
        assert!(out.contains("2. +380671112233"));
        assert!(out.contains("Wrong position. Please try again."));
        assert!(out.contains("Please enter a valid phone number."));
        assert!(out.contains("John's phone +380671112233 was changed to +380501234567."));

        let phones = &store.saved().get("John").unwrap().phones;
        assert_eq!(phones[1].as_str(), "+380501234567");
    }

    #[test]
    fn change_phone_cancel_leaves_book_untouched() {
        let store = store_of(vec![contact("John", &["0931234567"])]);
        let (store, out) = converse(store, "change phone John\n1\nexit\nexit\n");

        assert!(out.contains("Exiting..."));
        assert!(out.contains("Good bye!"));
        // only the save on the way out
        assert_eq!(store.save_count(), 1);
        assert_eq!(
            store.saved().get("John").unwrap().phones[0].as_str(),
            "+380931234567"
        );
    }

    #[test]
    fn change_or_remove_without_phones() {
        let store = store_of(vec![contact("John", &[])]);
        let (_, out) = converse(store, "change phone John\nremove phone John\nexit\n");
        assert_eq!(out.matches("John hasn't any phone yet.").count(), 2);
    }

    #[test]
    fn remove_phone_interactively() {
        let store = store_of(vec![contact("John", &["0931234567", "0671112233"])]);
        let (store, out) = converse(store, "remove phone John\n1\nexit\n");

        assert!(out.contains("John's phone +380931234567 was deleted."));
        let phones = &store.saved().get("John").unwrap().phones;
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "+380671112233");
    }

    #[test]
    fn append_phone_rejects_any_duplicate() {
        let store = store_of(vec![contact("John", &["0931234567", "0671112233"])]);
        let script = "\
            append phone John 0671112233\n\
            append phone John 0501234567\n\
            exit\n";
        let (store, out) = converse(store, script);

        assert!(out.contains("+380671112233 is already in John's phones. Try again."));
        assert!(out.contains("To John's phones was added +380501234567."));
        assert_eq!(store.saved().get("John").unwrap().phones.len(), 3);
    }

    #[test]
    fn show_phones_and_delete() {
        let store = store_of(vec![
            contact("John", &["0931234567"]),
            contact("Ann", &[]),
        ]);
        let script = "\
            show phones John\n\
            show phones Ann\n\
            del contact John\n\
            show phones John\n\
            exit\n";
        let (store, out) = converse(store, script);

        assert!(out.contains("John phone numbers:\n1. +380931234567"));
        assert!(out.contains("Ann has no phone numbers."));
        assert!(out.contains("Contact John was deleted from phonebook."));
        assert!(out.contains("This contact doesn't exist in the phonebook."));
        assert!(!store.saved().contains("John"));
    }

    #[test]
    fn find_lists_matches() {
        let store = store_of(vec![
            contact("John", &["0931234567"]),
            contact("Ann", &["0671112233"]),
        ]);
        let (_, out) = converse(store, "find 067\nfind Zed\nfind\nexit\n");

        assert!(out.contains("1 records were found with your search request:"));
        assert!(out.contains("1. Ann: +380671112233"));
        assert!(out.contains("No records were found with your search request."));
        assert!(out.contains("Enter the search request and try again."));
    }

    #[test]
    fn show_all_prints_everything_when_short() {
        let store = store_of(vec![contact("Zoe", &[]), contact("Ann", &["0931234567"])]);
        let (_, out) = converse(store, "show all\nexit\n");

        assert!(out.contains("1. Ann: +380931234567\n2. Zoe: No phones\n"));
        assert!(!out.contains("Page 1"));
    }

    #[test]
    fn show_all_pages_long_books() {
        let store = numbered_store(12);
        let (_, out) = converse(store, "show all\n\n\nexit\n");

        assert!(out.contains("Page 1 of 3:"));
        assert!(out.contains("Page 3 of 3:"));
        assert!(out.contains("12. Contact 12"));
        assert!(out.contains("This is the final page."));
        assert_eq!(out.matches("Enter anything to continue").count(), 2);
    }

    #[test]
    fn show_all_can_stop_early() {
        let store = numbered_store(12);
        let (_, out) = converse(store, "show all\nstop\nexit\n");

        assert!(out.contains("Page 1 of 3:"));
        assert!(!out.contains("Page 2 of 3:"));
        assert!(out.contains("Good bye!"));
    }

    #[test]
    fn paging_follows_config() {
        let config = BookConfig {
            page_size: 2,
            paginate_over: 3,
            ..BookConfig::default()
        };
        let store = numbered_store(4);
        let (_, out) = converse_with(store, config, "show all\n\nexit\n");
        assert!(out.contains("Page 2 of 2:"));
    }

    #[test]
    fn show_all_on_empty_book() {
        let (_, out) = converse(InMemoryStore::new(), "show all\nexit\n");
        assert!(out.contains("The phonebook is empty."));
    }

    #[test]
    fn help_lists_commands() {
        let (_, out) = converse(InMemoryStore::new(), "help\nexit\n");
        assert!(out.contains("'change phone [name]*'"));
        assert!(out.contains("'when bday [name]*'"));
    }
}
