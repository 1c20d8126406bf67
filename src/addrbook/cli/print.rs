use addrbook::commands::list::Page;
use addrbook::commands::{CmdMessage, MessageLevel};
use addrbook::model::{Phone, Record};
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_phones<W: Write>(out: &mut W, phones: &[Phone]) -> io::Result<()> {
    for (i, phone) in phones.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, phone)?;
    }
    Ok(())
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, record)?;
    }
    Ok(())
}

pub(super) fn print_page<W: Write>(out: &mut W, page: &Page<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}\n",
        format!("Page {} of {}:", page.number, page.total).bold()
    )?;
    for (offset, record) in page.records.iter().enumerate() {
        writeln!(out, "{}. {}\n", page.first_position + offset, record)?;
    }
    if page.is_last() {
        writeln!(out, "{}", "This is the final page.".dimmed())?;
    }
    Ok(())
}
