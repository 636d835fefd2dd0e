use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::library::TransactionKind;

// LoanDto reports one completed issue or return back to the caller.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanDto {
    pub kind: TransactionKind,
    pub member_id: String,
    pub member_name: String,
    pub isbn: String,
    pub title: String,
    pub date: NaiveDate,
}

// BorrowedBookDto is one held copy inside a member's borrowing summary.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowedBookDto {
    pub isbn: String,
    pub title: String,
}

// MemberSummaryDto lists what a single member currently holds.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberSummaryDto {
    pub member_id: String,
    pub member_name: String,
    pub books: Vec<BorrowedBookDto>,
}
