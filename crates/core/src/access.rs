//! Project access resolution.
//!
//! Decides what a requester may do with a project: owners hold full
//! permissions, active collaborators hold exactly the flags on their grant,
//! everyone else holds nothing. This is pure read-and-decide logic over
//! already-fetched rows -- the caller supplies the project's owner-reference
//! columns and the requester's active collaboration grant (if any) and gets
//! a serializable resolution back. Lookup failures never reach this module:
//! the repository layer keeps `Err` (lookup failed) apart from `Ok(None)`
//! (no record), and only the latter is folded into a denial here.

use serde::{Deserialize, Serialize};

use crate::collaboration::{grants_access, Permissions};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Owner references
// ---------------------------------------------------------------------------

/// The owner-reference columns of a project row.
///
/// Historical schema drift left three candidate owner columns; at most one
/// is populated and authoritative per row. New rows always populate
/// `user_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRefs {
    pub user_id: Option<DbId>,
    pub owner_id: Option<DbId>,
    pub provider_id: Option<DbId>,
}

/// Owner-column accessors probed in priority order: the current `user_id`
/// column first, then the legacy alternates.
const OWNER_FIELDS: &[fn(&OwnerRefs) -> Option<DbId>] = &[
    |refs| refs.user_id,
    |refs| refs.owner_id,
    |refs| refs.provider_id,
];

/// Returns the authoritative owner of a project: the first populated owner
/// column in priority order, or `None` for a row with no owner reference.
pub fn owner_of(refs: &OwnerRefs) -> Option<DbId> {
    OWNER_FIELDS.iter().find_map(|field| field(refs))
}

/// Returns `true` if any populated owner column equals the requester.
pub fn is_owner(refs: &OwnerRefs, requester_id: DbId) -> bool {
    OWNER_FIELDS
        .iter()
        .filter_map(|field| field(refs))
        .any(|id| id == requester_id)
}

// ---------------------------------------------------------------------------
// Collaboration grants
// ---------------------------------------------------------------------------

/// A collaborator's effective grant on a project, extracted from an active
/// collaboration row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationGrant {
    pub collaborator_id: DbId,
    pub permissions: Permissions,
}

impl CollaborationGrant {
    /// Build a grant from a collaboration row's fields.
    ///
    /// Returns `None` unless the row's status grants access, so inactive and
    /// pending collaborations can never leak permissions into resolution.
    pub fn from_row(
        status: &str,
        collaborator_id: DbId,
        permissions: Permissions,
    ) -> Option<Self> {
        if grants_access(status) {
            Some(Self {
                collaborator_id,
                permissions,
            })
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// The outcome of access resolution for one (project, requester) pair.
///
/// Plain serializable data, suitable for embedding directly in a JSON
/// response body. `permissions` is `None` exactly when the requester has no
/// owning or active-collaborator relationship with the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectAccess {
    pub is_owner: bool,
    pub is_collaborator: bool,
    pub permissions: Option<Permissions>,
}

impl ProjectAccess {
    /// The no-access outcome.
    pub const fn denied() -> Self {
        Self {
            is_owner: false,
            is_collaborator: false,
            permissions: None,
        }
    }

    pub fn can_view(&self) -> bool {
        self.permissions.is_some_and(|p| p.view)
    }

    pub fn can_edit(&self) -> bool {
        self.permissions.is_some_and(|p| p.edit)
    }

    pub fn can_delete(&self) -> bool {
        self.permissions.is_some_and(|p| p.delete)
    }
}

/// Resolve a requester's effective access to a project.
///
/// `collaboration` is the requester's active grant for this project, if one
/// exists. Absence means "no grant exists" -- a collaboration lookup that
/// failed outright must be surfaced by the caller as an error instead of
/// being passed here as `None`.
pub fn resolve_access(
    refs: &OwnerRefs,
    requester_id: DbId,
    collaboration: Option<&CollaborationGrant>,
) -> ProjectAccess {
    if is_owner(refs, requester_id) {
        return ProjectAccess {
            is_owner: true,
            is_collaborator: false,
            permissions: Some(Permissions::full()),
        };
    }

    match collaboration {
        Some(grant) if grant.collaborator_id == requester_id => ProjectAccess {
            is_owner: false,
            is_collaborator: true,
            permissions: Some(grant.permissions),
        },
        _ => ProjectAccess::denied(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn id(n: u128) -> DbId {
        Uuid::from_u128(n)
    }

    fn refs_with_user_id(owner: DbId) -> OwnerRefs {
        OwnerRefs {
            user_id: Some(owner),
            ..OwnerRefs::default()
        }
    }

    // -----------------------------------------------------------------------
    // Owner-column probing
    // -----------------------------------------------------------------------

    #[test]
    fn test_owner_of_empty_refs_is_none() {
        assert_eq!(owner_of(&OwnerRefs::default()), None);
    }

    #[test]
    fn test_owner_of_finds_each_column() {
        let u = id(1);
        assert_eq!(owner_of(&refs_with_user_id(u)), Some(u));
        assert_eq!(
            owner_of(&OwnerRefs {
                owner_id: Some(u),
                ..OwnerRefs::default()
            }),
            Some(u)
        );
        assert_eq!(
            owner_of(&OwnerRefs {
                provider_id: Some(u),
                ..OwnerRefs::default()
            }),
            Some(u)
        );
    }

    #[test]
    fn test_owner_of_prefers_user_id_over_legacy_columns() {
        let refs = OwnerRefs {
            user_id: Some(id(1)),
            owner_id: Some(id(2)),
            provider_id: Some(id(3)),
        };
        assert_eq!(owner_of(&refs), Some(id(1)));
    }

    #[test]
    fn test_is_owner_matches_any_populated_column() {
        let u = id(7);
        assert!(is_owner(&refs_with_user_id(u), u));
        assert!(is_owner(
            &OwnerRefs {
                owner_id: Some(u),
                ..OwnerRefs::default()
            },
            u
        ));
        assert!(is_owner(
            &OwnerRefs {
                provider_id: Some(u),
                ..OwnerRefs::default()
            },
            u
        ));
        assert!(!is_owner(&refs_with_user_id(u), id(8)));
        assert!(!is_owner(&OwnerRefs::default(), u));
    }

    // -----------------------------------------------------------------------
    // Grant construction
    // -----------------------------------------------------------------------

    #[test]
    fn test_grant_from_active_row() {
        let grant = CollaborationGrant::from_row("active", id(2), Permissions::view_only());
        assert_eq!(
            grant,
            Some(CollaborationGrant {
                collaborator_id: id(2),
                permissions: Permissions::view_only(),
            })
        );
    }

    #[test]
    fn test_grant_from_non_active_row_is_none() {
        assert_eq!(
            CollaborationGrant::from_row("pending", id(2), Permissions::full()),
            None
        );
        assert_eq!(
            CollaborationGrant::from_row("inactive", id(2), Permissions::full()),
            None
        );
        assert_eq!(
            CollaborationGrant::from_row("", id(2), Permissions::full()),
            None
        );
    }

    // -----------------------------------------------------------------------
    // Resolution
    // -----------------------------------------------------------------------

    #[test]
    fn test_owner_gets_full_permissions() {
        let owner = id(1);
        let access = resolve_access(&refs_with_user_id(owner), owner, None);
        assert!(access.is_owner);
        assert!(!access.is_collaborator);
        assert_eq!(access.permissions, Some(Permissions::full()));
        assert!(access.can_view() && access.can_edit() && access.can_delete());
    }

    #[test]
    fn test_legacy_owner_column_still_resolves_as_owner() {
        let owner = id(1);
        let refs = OwnerRefs {
            owner_id: Some(owner),
            ..OwnerRefs::default()
        };
        let access = resolve_access(&refs, owner, None);
        assert!(access.is_owner);
        assert_eq!(access.permissions, Some(Permissions::full()));
    }

    #[test]
    fn test_owner_wins_over_collaboration_grant() {
        let owner = id(1);
        let grant = CollaborationGrant {
            collaborator_id: owner,
            permissions: Permissions::view_only(),
        };
        let access = resolve_access(&refs_with_user_id(owner), owner, Some(&grant));
        assert!(access.is_owner);
        assert!(!access.is_collaborator);
        assert_eq!(access.permissions, Some(Permissions::full()));
    }

    #[test]
    fn test_collaborator_gets_grant_permissions_verbatim() {
        let owner = id(1);
        let collaborator = id(2);
        let perms = Permissions {
            view: true,
            edit: false,
            delete: false,
        };
        let grant = CollaborationGrant {
            collaborator_id: collaborator,
            permissions: perms,
        };

        let access = resolve_access(&refs_with_user_id(owner), collaborator, Some(&grant));
        assert!(!access.is_owner);
        assert!(access.is_collaborator);
        assert_eq!(access.permissions, Some(perms));
        assert!(access.can_view());
        assert!(!access.can_edit());
        assert!(!access.can_delete());
    }

    #[test]
    fn test_no_relationship_is_denied() {
        let access = resolve_access(&refs_with_user_id(id(1)), id(2), None);
        assert_eq!(access, ProjectAccess::denied());
        assert!(!access.can_view() && !access.can_edit() && !access.can_delete());
    }

    #[test]
    fn test_grant_for_someone_else_is_denied() {
        let grant = CollaborationGrant {
            collaborator_id: id(3),
            permissions: Permissions::full(),
        };
        let access = resolve_access(&refs_with_user_id(id(1)), id(2), Some(&grant));
        assert_eq!(access, ProjectAccess::denied());
    }

    #[test]
    fn test_non_active_collaboration_never_grants_access() {
        // An inactive row never becomes a grant, so resolution sees None.
        let grant = CollaborationGrant::from_row("inactive", id(2), Permissions::full());
        let access = resolve_access(&refs_with_user_id(id(1)), id(2), grant.as_ref());
        assert_eq!(access, ProjectAccess::denied());
    }

    #[test]
    fn test_ownerless_project_denies_everyone() {
        let access = resolve_access(&OwnerRefs::default(), id(5), None);
        assert_eq!(access, ProjectAccess::denied());
    }

    #[test]
    fn test_access_serializes_as_plain_data() {
        let access = resolve_access(&refs_with_user_id(id(1)), id(1), None);
        let value = serde_json::to_value(access).unwrap();
        assert_eq!(value["is_owner"], true);
        assert_eq!(value["is_collaborator"], false);
        assert_eq!(value["permissions"]["view"], true);
        assert_eq!(value["permissions"]["edit"], true);
        assert_eq!(value["permissions"]["delete"], true);
    }
}
