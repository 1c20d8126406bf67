use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.csv";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_PAGINATE_OVER: usize = 10;

/// Environment variable pointing at the directory holding `config.json`.
pub const HOME_ENV: &str = "ADDRBOOK_HOME";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Contacts file; relative paths resolve against the working directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: PathBuf,

    /// Contacts per page in `show all`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// `show all` pages only when there are more contacts than this
    #[serde(default = "default_paginate_over")]
    pub paginate_over: usize,
}

fn default_contacts_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_paginate_over() -> usize {
    DEFAULT_PAGINATE_OVER
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            page_size: DEFAULT_PAGE_SIZE,
            paginate_over: DEFAULT_PAGINATE_OVER,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    /// Override the contacts file (from the command line)
    pub fn with_contacts_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.contacts_file = path;
        }
        self
    }

    /// The contacts file, resolved against `cwd` when relative
    pub fn contacts_path(&self, cwd: &Path) -> PathBuf {
        if self.contacts_file.is_absolute() {
            self.contacts_file.clone()
        } else {
            cwd.join(&self.contacts_file)
        }
    }
}
