use crate::commands::{CmdMessage, CmdResult};

pub const GREETING: &str = "Hi. How can I help you?";

pub const USAGE: &str = "\
'hello' -> Greets you back.
'show all' -> Lists every contact by name. More than 10 contacts are shown 5 per page.
'add [name]* (phone)**' -> Adds a contact to the phonebook.
'change phone [name]*' -> Lets you pick one of the contact's phones by position and replace it.
'append phone [name]* [phone]*' -> Adds another phone to the contact.
'remove phone [name]*' -> Lets you pick one of the contact's phones by position and delete it.
'del contact [name]*' -> Deletes the contact and all of its data.
'show phones [name]*' -> Lists the contact's phones.
'set bday [name]* [birthday]*' -> Sets the contact's birthday, as 'dd.mm' or 'dd.mm.yyyy'.
'when bday [name]*' -> Tells how many days are left until the contact's birthday.
'find [text]*' -> Lists contacts whose name or phone contains the text.
'help' -> Shows this text.
'exit', 'close', 'good bye', 'goodbye' -> Saves the phonebook and quits.

*[] - required. Type without brackets.
**() - optional. Type without brackets.

Every change is saved to the contacts file as soon as the command completes.";

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(GREETING))
}

pub fn usage() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(USAGE))
}
