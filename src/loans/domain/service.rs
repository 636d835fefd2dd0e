use tracing::log::debug;
use crate::catalog::domain::CatalogStore;
use crate::core::library::{LibraryError, LibraryResult};
use crate::loans::domain::model::{LoanLedger, TransactionEntity, TransactionLog};
use crate::loans::dto::{BorrowedBookDto, LoanDto, MemberSummaryDto};
use crate::members::domain::MemberRegistry;
use crate::utils::date;

// Library is the process-wide context. It owns the four stores for the
// lifetime of the session and is the only mutation path into them, so a
// failed operation leaves every store exactly as it found it.
#[derive(Debug, PartialEq, Clone, Default)]
pub(crate) struct Library {
    pub catalog: CatalogStore,
    pub members: MemberRegistry,
    pub ledger: LoanLedger,
    pub transactions: TransactionLog,
}

impl Library {
    pub fn new(catalog: CatalogStore, members: MemberRegistry,
               ledger: LoanLedger, transactions: TransactionLog) -> Self {
        Self {
            catalog,
            members,
            ledger,
            transactions,
        }
    }

    pub fn issue_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let member = self.members.find_by_id(member_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("member with id {} not found", member_id).as_str()))?;
        let borrowing_limit = member.borrowing_limit;
        let member_name = member.name.to_string();
        let book = self.catalog.find_by_isbn_mut(isbn)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", isbn).as_str()))?;
        if book.details().available_copies < 1 {
            return Err(LibraryError::unavailable(
                format!("no copies of {} available", isbn).as_str()));
        }
        let borrowed = self.ledger.borrowed_count(member_id) as i64;
        if borrowed >= borrowing_limit {
            return Err(LibraryError::limit_exceeded(
                format!("member {} has reached the borrowing limit of {}",
                        member_id, borrowing_limit).as_str()));
        }
        book.issue_copy()?;
        let title = book.title().to_string();
        self.ledger.record_issue(member_id, isbn);
        let transaction = TransactionEntity::issue(member_id, isbn, date::today());
        let loan = LoanDto {
            kind: transaction.kind,
            member_id: member_id.to_string(),
            member_name,
            isbn: isbn.to_string(),
            title,
            date: transaction.date,
        };
        self.transactions.append(transaction);
        debug!("issued {} to {}", isbn, member_id);
        Ok(loan)
    }

    pub fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let member_name = self.members.find_by_id(member_id)
            .map(|member| member.name.to_string())
            .ok_or_else(|| LibraryError::not_found(
                format!("member with id {} not found", member_id).as_str()))?;
        let book = self.catalog.find_by_isbn_mut(isbn)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", isbn).as_str()))?;
        if !self.ledger.holds(member_id, isbn) {
            return Err(LibraryError::not_borrowed(
                format!("book {} is not borrowed by member {}", isbn, member_id).as_str()));
        }
        book.return_copy()?;
        let title = book.title().to_string();
        self.ledger.record_return(member_id, isbn)?;
        let transaction = TransactionEntity::returned(member_id, isbn, date::today());
        let loan = LoanDto {
            kind: transaction.kind,
            member_id: member_id.to_string(),
            member_name,
            isbn: isbn.to_string(),
            title,
            date: transaction.date,
        };
        self.transactions.append(transaction);
        debug!("returned {} from {}", isbn, member_id);
        Ok(loan)
    }

    // One summary per ledger entry, resolved lazily against the current
    // catalog and registry. A dangling id degrades to a placeholder name
    // instead of failing the whole listing.
    pub fn borrowing_summary(&self) -> impl Iterator<Item = MemberSummaryDto> + '_ {
        self.ledger.iter().map(|(member_id, isbns)| {
            let member_name = self.members.find_by_id(member_id.as_str())
                .map(|member| member.name.to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            let books = isbns.iter().map(|isbn| BorrowedBookDto {
                isbn: isbn.to_string(),
                title: self.catalog.find_by_isbn(isbn.as_str())
                    .map(|book| book.title().to_string())
                    .unwrap_or_else(|| "Unknown Book".to_string()),
            }).collect();
            MemberSummaryDto {
                member_id: member_id.to_string(),
                member_name,
                books,
            }
        })
    }

    // The runner-up by occurrences across all current loans; None until at
    // least two distinct isbns are out.
    pub fn second_most_issued(&self) -> Option<(String, usize)> {
        let counts = self.ledger.issue_counts();
        if counts.len() < 2 {
            return None;
        }
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked.into_iter().nth(1)
    }
}
