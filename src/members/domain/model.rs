use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const PREMIUM_MEMBERSHIP: &str = "Premium";
pub(crate) const PREMIUM_BORROWING_LIMIT: i64 = 5;
pub(crate) const STANDARD_BORROWING_LIMIT: i64 = 3;

fn default_membership_type() -> String {
    "Standard".to_string()
}

// MemberEntity abstracts a registered library member. The borrowing limit is
// fixed when the member is created: any tier other than "Premium" gets the
// standard limit, unrecognized strings included.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberEntity {
    pub name: String,
    pub member_id: String,
    pub age: i64,
    #[serde(default = "default_membership_type")]
    pub membership_type: String,
    pub borrowing_limit: i64,
}

impl MemberEntity {
    pub fn new(name: &str, member_id: &str, age: i64, membership_type: &str) -> LibraryResult<Self> {
        if name.is_empty() || member_id.is_empty() {
            return Err(LibraryError::validation("invalid member data: name and member id are required"));
        }
        if age <= 0 {
            return Err(LibraryError::validation("invalid member data: age must be a positive integer"));
        }
        let borrowing_limit = if membership_type == PREMIUM_MEMBERSHIP {
            PREMIUM_BORROWING_LIMIT
        } else {
            STANDARD_BORROWING_LIMIT
        };
        Ok(Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            age,
            membership_type: membership_type.to_string(),
            borrowing_limit,
        })
    }
}
