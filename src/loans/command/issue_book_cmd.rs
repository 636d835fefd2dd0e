use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::service::Library;
use crate::loans::dto::LoanDto;

pub(crate) struct IssueBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> IssueBookCommand<'a> {
    pub(crate) fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    pub(crate) member_id: String,
    pub(crate) isbn: String,
}

impl IssueBookCommandRequest {
    pub fn new(member_id: &str, isbn: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    pub loan: LoanDto,
}

impl IssueBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

impl<'a> Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'a> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.library.issue_book(req.member_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::model::BookEntity;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::TransactionKind;
    use crate::loans::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
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
    fn test_should_run_issue_book() {
        let mut library = library();
        let res = IssueBookCommand::new(&mut library)
            .execute(IssueBookCommandRequest::new("m1", "111"))
            .expect("should issue book");
        assert_eq!(TransactionKind::Issue, res.loan.kind);
        assert_eq!("title", res.loan.title.as_str());
        assert!(library.ledger.holds("m1", "111"));
    }

    #[test]
    fn test_should_reject_unknown_ids() {
        let mut library = library();
        let res = IssueBookCommand::new(&mut library)
            .execute(IssueBookCommandRequest::new("m9", "111"));
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }

    #[test]
    fn test_should_reject_issue_without_copies() {
        let mut library = library();
        IssueBookCommand::new(&mut library)
            .execute(IssueBookCommandRequest::new("m1", "111"))
            .expect("should issue book");
        let mut second = IssueBookCommand::new(&mut library);
        let res = second.execute(IssueBookCommandRequest::new("m1", "111"));
        assert!(matches!(res, Err(CommandError::Unavailable { message: _ })));
    }
}
