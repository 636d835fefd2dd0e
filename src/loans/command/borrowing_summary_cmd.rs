use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::service::Library;
use crate::loans::dto::MemberSummaryDto;

pub(crate) struct BorrowingSummaryCommand<'a> {
    library: &'a mut Library,
}

impl<'a> BorrowingSummaryCommand<'a> {
    pub(crate) fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BorrowingSummaryCommandRequest {}

impl BorrowingSummaryCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowingSummaryCommandResponse {
    pub summary: Vec<MemberSummaryDto>,
}

impl BorrowingSummaryCommandResponse {
    pub fn new(summary: Vec<MemberSummaryDto>) -> Self {
        Self {
            summary,
        }
    }
}

impl<'a> Command<BorrowingSummaryCommandRequest, BorrowingSummaryCommandResponse> for BorrowingSummaryCommand<'a> {
    fn execute(&mut self, _req: BorrowingSummaryCommandRequest) -> Result<BorrowingSummaryCommandResponse, CommandError> {
        let summary = self.library.borrowing_summary().collect();
        Ok(BorrowingSummaryCommandResponse::new(summary))
    }
}
