use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub(crate) const BOOKS_FILE: &str = "books.json";
pub(crate) const MEMBERS_FILE: &str = "members.json";
pub(crate) const BORROWED_FILE: &str = "borrowed.json";
pub(crate) const TRANSACTIONS_FILE: &str = "transactions.json";

// Configuration abstracts config options for the catalog manager
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub data_dir: PathBuf,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            data_dir: PathBuf::from(data_dir),
        }
    }

    pub fn books_file(&self) -> PathBuf {
        self.data_dir.join(BOOKS_FILE)
    }

    pub fn members_file(&self) -> PathBuf {
        self.data_dir.join(MEMBERS_FILE)
    }

    pub fn borrowed_file(&self) -> PathBuf {
        self.data_dir.join(BORROWED_FILE)
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir.join(TRANSACTIONS_FILE)
    }
}
