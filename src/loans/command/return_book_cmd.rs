use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::service::Library;
use crate::loans::dto::LoanDto;

pub(crate) struct ReturnBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> ReturnBookCommand<'a> {
    pub(crate) fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) member_id: String,
    pub(crate) isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: &str, isbn: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.library.return_book(req.member_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::model::BookEntity;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::TransactionKind;
    use crate::loans::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::loans::domain::service::Library;
    use crate::members::domain::model::MemberEntity;

    fn library() -> Library {
        let mut library = Library::default();
        library.catalog.add_book(
            BookEntity::physical("title", "author", "111", 1, "2001", "")
                .expect("should build book")).expect("should add book");
        library.members.add_member(
            MemberEntity::new("alice", "m1", 30, "Standard")
                .expect("should build member")).expect("should add member");
        library
    }

    #[test]
    fn test_should_run_return_book() {
        let mut library = library();
        IssueBookCommand::new(&mut library)
            .execute(IssueBookCommandRequest::new("m1", "111"))
            .expect("should issue book");
        let res = ReturnBookCommand::new(&mut library)
            .execute(ReturnBookCommandRequest::new("m1", "111"))
            .expect("should return book");
        assert_eq!(TransactionKind::Return, res.loan.kind);
        assert!(library.ledger.is_empty());
    }

    #[test]
    fn test_should_reject_return_without_loan() {
        let mut library = library();
        let res = ReturnBookCommand::new(&mut library)
            .execute(ReturnBookCommandRequest::new("m1", "111"));
        assert!(matches!(res, Err(CommandError::NotBorrowed { message: _ })));
    }
}
