//! Core domain types for the membership registry.

use serde::{Deserialize, Serialize};

/// Unique identifier for a member (the `user` field)
pub type Username = String;

/// A registered member.
///
/// `age` is optional and serialized as `null` when absent, so a record
/// registered without an age echoes back exactly as it was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user: Username,
    #[serde(default)]
    pub age: Option<i32>,
}

impl Member {
    pub fn new(user: impl Into<Username>, age: Option<i32>) -> Self {
        Self {
            user: user.into(),
            age,
        }
    }
}

/// Records present in every freshly started registry
pub fn seed_members() -> Vec<Member> {
    vec![
        Member::new("making", Some(10)),
        Member::new("tichimura", Some(30)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_serializes_null_age() {
        let member = Member::new("alice", None);
        let json = serde_json::to_string(&member).unwrap();
        assert_eq!(json, r#"{"user":"alice","age":null}"#);
    }

    #[test]
    fn test_member_deserializes_without_age() {
        let member: Member = serde_json::from_str(r#"{"user":"bob"}"#).unwrap();
        assert_eq!(member, Member::new("bob", None));
    }
}
