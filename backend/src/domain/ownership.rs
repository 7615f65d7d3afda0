//! Ownership authorization for destructive blog mutations.
//!
//! A pure comparison with no I/O, callable before any destructive action so
//! the action is attempted at most after a successful check.

use crate::domain::identity::Identity;
use crate::domain::user::UserId;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipDecision {
    /// The caller owns the entry and may mutate it.
    Permit,
    /// The caller may not mutate the entry.
    Deny,
}

impl OwnershipDecision {
    /// True for [`OwnershipDecision::Permit`].
    pub const fn is_permitted(self) -> bool {
        matches!(self, Self::Permit)
    }
}

/// Decide whether `identity` may mutate an entry recorded against `owner`.
///
/// Denies outright when no identity is present, when the entry has no
/// recorded owner, or when the identifiers differ. Permits only on an exact
/// match.
pub fn decide(identity: Option<&Identity>, owner: Option<&UserId>) -> OwnershipDecision {
    match (identity, owner) {
        (Some(identity), Some(owner)) if identity.user_id() == owner => OwnershipDecision::Permit,
        _ => OwnershipDecision::Deny,
    }
}

/// Whether updates check ownership like deletes do.
///
/// The permissive default reproduces the long-standing observable behavior:
/// any caller, authenticated or not, may update any entry's mutable fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateOwnershipPolicy {
    /// Updates skip authentication and ownership entirely.
    #[default]
    Permissive,
    /// Updates require the owning identity, mirroring delete.
    Enforced,
}

impl UpdateOwnershipPolicy {
    /// True when updates must pass the ownership check.
    pub const fn is_enforced(self) -> bool {
        matches!(self, Self::Enforced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Username;
    use rstest::rstest;

    fn identity_for(user_id: UserId) -> Identity {
        Identity::new(Username::new("mluukkai").expect("username"), user_id)
    }

    #[test]
    fn owner_is_permitted() {
        let owner = UserId::random();
        let decision = decide(Some(&identity_for(owner)), Some(&owner));
        assert_eq!(decision, OwnershipDecision::Permit);
        assert!(decision.is_permitted());
    }

    #[test]
    fn different_user_is_denied() {
        let decision = decide(Some(&identity_for(UserId::random())), Some(&UserId::random()));
        assert_eq!(decision, OwnershipDecision::Deny);
    }

    #[rstest]
    #[case(false, true)]
    #[case(true, false)]
    #[case(false, false)]
    fn absent_identity_or_owner_is_denied(#[case] with_identity: bool, #[case] with_owner: bool) {
        let identity = with_identity.then(|| identity_for(UserId::random()));
        let owner = with_owner.then(UserId::random);

        let decision = decide(identity.as_ref(), owner.as_ref());
        assert_eq!(decision, OwnershipDecision::Deny);
    }

    #[test]
    fn policy_defaults_to_permissive() {
        assert_eq!(
            UpdateOwnershipPolicy::default(),
            UpdateOwnershipPolicy::Permissive
        );
        assert!(!UpdateOwnershipPolicy::default().is_enforced());
    }
}
