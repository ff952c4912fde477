//! The in-memory member store.
//!
//! All access goes through a single `RwLock` around the map. Each operation
//! takes the lock exactly once, so a reader sees either the complete prior
//! write for a key or nothing at all. No operation spans more than one key.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::error::{MembershipError, Result};
use crate::types::{seed_members, Member, Username};

/// Thread-safe mapping from username to [`Member`].
///
/// Share it behind an `Arc`; callers never lock anything themselves.
#[derive(Debug, Default)]
pub struct MemberStore {
    members: RwLock<HashMap<Username, Member>>,
}

impl MemberStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the seed records
    /// (`making` aged 10, `tichimura` aged 30).
    pub fn with_seed_members() -> Self {
        let members = seed_members()
            .into_iter()
            .map(|member| (member.user.clone(), member))
            .collect();
        Self {
            members: RwLock::new(members),
        }
    }

    /// Insert or replace the member keyed by `member.user` and echo it back.
    ///
    /// Same-key races are last-write-wins.
    pub fn register(&self, member: Member) -> Result<Member> {
        if member.user.is_empty() {
            return Err(MembershipError::EmptyUsername);
        }

        // Every write is a single insert, so a poisoned map is still consistent.
        let mut members = self.members.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = members.insert(member.user.clone(), member.clone()).is_some();
        debug!(user = %member.user, replaced, "Registered member");
        Ok(member)
    }

    /// Point lookup. Absence is `None`, not an error.
    pub fn get(&self, user: &str) -> Option<Member> {
        let members = self.members.read().unwrap_or_else(PoisonError::into_inner);
        members.get(user).cloned()
    }

    /// Number of stored members
    pub fn len(&self) -> usize {
        self.members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_seeded_store_contains_fixed_members() {
        let store = MemberStore::with_seed_members();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("making"), Some(Member::new("making", Some(10))));
        assert_eq!(
            store.get("tichimura"),
            Some(Member::new("tichimura", Some(30)))
        );
    }

    #[test]
    fn test_register_then_get_round_trip() {
        let store = MemberStore::new();
        let alice = Member::new("alice", Some(25));

        let echoed = store.register(alice.clone()).unwrap();

        assert_eq!(echoed, alice);
        assert_eq!(store.get("alice"), Some(alice));
    }

    #[test]
    fn test_register_accepts_absent_age() {
        let store = MemberStore::new();
        let member = Member::new("nobody-knows", None);

        store.register(member.clone()).unwrap();

        assert_eq!(store.get("nobody-knows"), Some(member));
    }

    #[test]
    fn test_reregistration_is_last_write_wins() {
        let store = MemberStore::with_seed_members();

        store.register(Member::new("alice", Some(25))).unwrap();
        store.register(Member::new("alice", Some(26))).unwrap();

        assert_eq!(store.get("alice"), Some(Member::new("alice", Some(26))));
        // Other keys are untouched
        assert_eq!(store.get("making"), Some(Member::new("making", Some(10))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_unknown_member_is_none() {
        let store = MemberStore::with_seed_members();
        assert!(store.get("ghost").is_none());
    }

    #[test]
    fn test_register_rejects_empty_user() {
        let store = MemberStore::new();

        let result = store.register(Member::new("", Some(1)));

        assert_eq!(result, Err(MembershipError::EmptyUsername));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_registrations_lose_no_writes() {
        let store = Arc::new(MemberStore::new());

        let handles: Vec<_> = (0..16)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        let user = format!("user-{}-{}", worker, i);
                        store.register(Member::new(user, Some(i))).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 16 * 50);
        for worker in 0..16 {
            for i in 0..50 {
                let user = format!("user-{}-{}", worker, i);
                assert_eq!(store.get(&user), Some(Member::new(user.clone(), Some(i))));
            }
        }
    }
}
