use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult, TransactionKind};

// TransactionEntity is one immutable line of the issue/return history.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct TransactionEntity {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "member")]
    pub member_id: String,
    #[serde(rename = "book")]
    pub isbn: String,
    pub date: NaiveDate,
}

impl TransactionEntity {
    pub fn issue(member_id: &str, isbn: &str, date: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Issue,
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
            date,
        }
    }

    pub fn returned(member_id: &str, isbn: &str, date: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Return,
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
            date,
        }
    }
}

// TransactionLog keeps every issue/return event in the order it happened.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct TransactionLog {
    entries: Vec<TransactionEntity>,
}

impl TransactionLog {
    pub fn append(&mut self, transaction: TransactionEntity) {
        self.entries.push(transaction);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionEntity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// LoanLedger maps a member id to the isbns that member currently holds. The
// same isbn appears once per copy held, so duplicates are meaningful. An
// entry disappears as soon as its last copy goes back.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct LoanLedger {
    entries: BTreeMap<String, Vec<String>>,
}

impl LoanLedger {
    pub fn borrowed_count(&self, member_id: &str) -> usize {
        self.entries.get(member_id).map(Vec::len).unwrap_or(0)
    }

    pub fn holds(&self, member_id: &str, isbn: &str) -> bool {
        match self.entries.get(member_id) {
            Some(isbns) => isbns.iter().any(|held| held == isbn),
            None => false,
        }
    }

    pub fn record_issue(&mut self, member_id: &str, isbn: &str) {
        self.entries.entry(member_id.to_string()).or_default().push(isbn.to_string());
    }

    // Removes exactly one occurrence of the isbn; a member holding several
    // copies of the same title gives back one copy per call.
    pub fn record_return(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()> {
        let isbns = match self.entries.get_mut(member_id) {
            Some(isbns) => isbns,
            None => {
                return Err(LibraryError::not_borrowed(
                    format!("book {} is not borrowed by member {}", isbn, member_id).as_str()));
            }
        };
        let position = match isbns.iter().position(|held| held == isbn) {
            Some(position) => position,
            None => {
                return Err(LibraryError::not_borrowed(
                    format!("book {} is not borrowed by member {}", isbn, member_id).as_str()));
            }
        };
        isbns.remove(position);
        if isbns.is_empty() {
            self.entries.remove(member_id);
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // How often each isbn occurs across all current loans.
    pub fn issue_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for isbns in self.entries.values() {
            for isbn in isbns {
                *counts.entry(isbn.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}
