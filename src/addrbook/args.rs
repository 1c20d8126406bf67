use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Line-oriented address book with birthdays", long_about = None)]
pub struct Cli {
    /// Contacts file (default: contacts.csv in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
