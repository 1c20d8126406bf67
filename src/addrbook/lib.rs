//! # addrbook Architecture
//!
//! addrbook is a small address book driven from a line-oriented prompt. The
//! library holds everything except the prompt itself, so every operation can
//! be exercised without a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, runs sub-prompts, prints results            │
//! │  - Flushes on exit, end of input and interrupt              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs) + API Layer (api.rs)                    │
//! │  - Line → keyword + arguments                               │
//! │  - Dispatches to commands, saves after every change         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on an in-memory AddressBook                     │
//! │  - Returns CmdResult with messages and listed records       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each prompt command
//! - [`parser`]: Command keywords, preamble stripping, exit phrases
//! - [`book`]: The in-memory [`book::AddressBook`]
//! - [`model`]: Value objects (`Name`, `Phone`, `Birthday`) and `Record`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
