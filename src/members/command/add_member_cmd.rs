use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::loans::domain::service::Library;
use crate::members::domain::model::MemberEntity;

pub(crate) struct AddMemberCommand<'a> {
    library: &'a mut Library,
}

impl<'a> AddMemberCommand<'a> {
    pub(crate) fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddMemberCommandRequest {
    pub(crate) name: String,
    pub(crate) member_id: String,
    pub(crate) age: i64,
    pub(crate) membership_type: String,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str, member_id: &str, age: i64, membership_type: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            age,
            membership_type: membership_type.to_string(),
        }
    }

    pub fn build_member(&self) -> LibraryResult<MemberEntity> {
        MemberEntity::new(self.name.as_str(), self.member_id.as_str(),
                          self.age, self.membership_type.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddMemberCommandResponse {
    pub member: MemberEntity,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberEntity) -> Self {
        Self {
            member,
        }
    }
}

impl<'a> Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand<'a> {
    fn execute(&mut self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        let member = req.build_member().map_err(CommandError::from)?;
        self.library.members.add_member(member.clone()).map_err(CommandError::from)?;
        Ok(AddMemberCommandResponse::new(member))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::loans::domain::service::Library;
    use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};

    #[test]
    fn test_should_run_add_member() {
        let mut library = Library::default();
        let res = AddMemberCommand::new(&mut library)
            .execute(AddMemberCommandRequest::new("alice", "m1", 30, "Premium"))
            .expect("should add member");
        assert_eq!("alice", res.member.name.as_str());
        assert_eq!(5, res.member.borrowing_limit);
        assert_eq!(1, library.members.len());
    }

    #[test]
    fn test_should_reject_duplicate_member_id() {
        let mut library = Library::default();
        AddMemberCommand::new(&mut library)
            .execute(AddMemberCommandRequest::new("alice", "m1", 30, "Standard"))
            .expect("should add member");
        let res = AddMemberCommand::new(&mut library)
            .execute(AddMemberCommandRequest::new("bob", "m1", 40, "Standard"));
        assert!(matches!(res, Err(CommandError::DuplicateKey { message: _ })));
    }

    #[test]
    fn test_should_reject_invalid_member_data() {
        let mut library = Library::default();
        let res = AddMemberCommand::new(&mut library)
            .execute(AddMemberCommandRequest::new("alice", "m1", 0, "Standard"));
        assert!(matches!(res, Err(CommandError::Validation { message: _ })));
        assert!(library.members.is_empty());
    }
}
