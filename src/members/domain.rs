use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::members::domain::model::MemberEntity;

pub mod model;

// MemberRegistry owns every registered member, keyed by member id.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct MemberRegistry {
    members: Vec<MemberEntity>,
}

impl MemberRegistry {
    pub fn add_member(&mut self, member: MemberEntity) -> LibraryResult<()> {
        if self.find_by_id(member.member_id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("member with id {} already exists", member.member_id).as_str()));
        }
        self.members.push(member);
        Ok(())
    }

    pub fn find_by_id(&self, member_id: &str) -> Option<&MemberEntity> {
        self.members.iter().find(|member| member.member_id == member_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberEntity> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MemberEntity> {
        self.members.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn sorted_by_name(&self) -> Vec<&MemberEntity> {
        let mut sorted: Vec<&MemberEntity> = self.members.iter().collect();
        sorted.sort_by_key(|member| member.name.to_lowercase());
        sorted
    }
}
