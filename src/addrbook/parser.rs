//! Turns a line typed at the prompt into a command and its arguments.
//!
//! Matching is ASCII case-insensitive and tolerant of leading chatter:
//! `please ADD John 0931234567` dispatches as `add` with `["John", "0931234567"]`.
//! Arguments keep the case they were typed in.

/// Words that end the session when no command keyword is present.
pub const EXIT_PHRASES: [&str; 4] = ["exit", "close", "good bye", "goodbye"];

/// Words that abort an interactive sub-prompt.
pub const CANCEL_WORDS: [&str; 3] = ["exit", "end", "stop"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    ShowAll,
    Add,
    ChangePhone,
    AppendPhone,
    RemovePhone,
    DelContact,
    ShowPhones,
    SetBday,
    WhenBday,
    Find,
    Help,
}

impl Command {
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::ShowAll,
        Command::Add,
        Command::ChangePhone,
        Command::AppendPhone,
        Command::RemovePhone,
        Command::DelContact,
        Command::ShowPhones,
        Command::SetBday,
        Command::WhenBday,
        Command::Find,
        Command::Help,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::ShowAll => "show all",
            Command::Add => "add",
            Command::ChangePhone => "change phone",
            Command::AppendPhone => "append phone",
            Command::RemovePhone => "remove phone",
            Command::DelContact => "del contact",
            Command::ShowPhones => "show phones",
            Command::SetBday => "set bday",
            Command::WhenBday => "when bday",
            Command::Find => "find",
            Command::Help => "help",
        }
    }

    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Command::Add
                | Command::ChangePhone
                | Command::AppendPhone
                | Command::RemovePhone
                | Command::DelContact
                | Command::SetBday
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command { command: Command, args: Vec<String> },
    Exit,
    Unsupported,
}

pub fn parse_line(line: &str) -> Input {
    let candidate = strip_preamble(line.trim());

    if let Some((command, rest)) = match_command(candidate) {
        let args = rest.split_whitespace().map(str::to_string).collect();
        return Input::Command { command, args };
    }

    if is_exit_phrase(line) {
        Input::Exit
    } else {
        Input::Unsupported
    }
}

/// True when the text contains any of [`EXIT_PHRASES`].
pub fn is_exit_phrase(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    EXIT_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// True when a sub-prompt answer asks to abort.
pub fn is_cancel_word(text: &str) -> bool {
    let lower = text.trim().to_ascii_lowercase();
    CANCEL_WORDS.contains(&lower.as_str())
}

/// Drops everything before the leftmost keyword occurrence.
fn strip_preamble(text: &str) -> &str {
    // ASCII lowercasing keeps byte offsets valid for slicing the original.
    let lower = text.to_ascii_lowercase();
    let start = Command::ALL
        .iter()
        .filter_map(|cmd| lower.find(cmd.keyword()))
        .min();

    match start {
        Some(pos) => &text[pos..],
        None => text,
    }
}

/// Longest keyword that prefixes the text, with the remainder after it.
fn match_command(text: &str) -> Option<(Command, &str)> {
    let lower = text.to_ascii_lowercase();
    Command::ALL
        .iter()
        .filter(|cmd| lower.starts_with(cmd.keyword()))
        .max_by_key(|cmd| cmd.keyword().len())
        .map(|cmd| (*cmd, &text[cmd.keyword().len()..]))
}
