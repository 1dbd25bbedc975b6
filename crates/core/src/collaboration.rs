//! Collaboration statuses and permission records.
//!
//! A collaboration links a project to a collaborator identity and carries a
//! status plus a set of boolean permission flags. Only an `"active"`
//! collaboration ever grants access; every other status is inert. This
//! module lives in `core` (zero internal deps) so the repository layer,
//! access resolution, and API handlers all share the same status set and
//! permission shape.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Known collaboration statuses.
pub mod statuses {
    /// The collaboration grants its permissions.
    pub const ACTIVE: &str = "active";
    /// Invited but not yet accepted.
    pub const PENDING: &str = "pending";
    /// Deactivated by either party.
    pub const INACTIVE: &str = "inactive";
}

/// The set of all valid collaboration statuses.
///
/// No transition rules exist between these values; updates may write any
/// member of the set, and only `"active"` is consulted during access
/// resolution.
pub const VALID_STATUSES: &[&str] = &[statuses::ACTIVE, statuses::PENDING, statuses::INACTIVE];

/// Returns `true` if the given status is a known collaboration status.
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

/// Returns `true` if a collaboration with this status grants its permissions.
pub fn grants_access(status: &str) -> bool {
    status == statuses::ACTIVE
}

/// Validate a collaboration status. Returns `Ok(())` or an error message.
pub fn validate_status(status: &str) -> Result<(), String> {
    if is_valid_status(status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid collaboration status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// Per-collaborator permission flags on a project.
///
/// Stored verbatim in the `permissions` JSONB column of a collaboration row
/// and returned verbatim by access resolution for collaborators. Flags
/// missing from persisted JSON deserialize as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub delete: bool,
}

impl Permissions {
    /// Full permissions, as held by a project owner.
    pub const fn full() -> Self {
        Self {
            view: true,
            edit: true,
            delete: true,
        }
    }

    /// No permissions at all.
    pub const fn none() -> Self {
        Self {
            view: false,
            edit: false,
            delete: false,
        }
    }

    /// Read-only permissions, the default for a fresh invitation.
    pub const fn view_only() -> Self {
        Self {
            view: true,
            edit: false,
            delete: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_statuses() {
        assert!(is_valid_status("active"));
        assert!(is_valid_status("pending"));
        assert!(is_valid_status("inactive"));
    }

    #[test]
    fn test_invalid_statuses() {
        assert!(!is_valid_status(""));
        assert!(!is_valid_status("revoked"));
        assert!(!is_valid_status("ACTIVE"));
        assert!(!is_valid_status("Active"));
    }

    #[test]
    fn test_only_active_grants_access() {
        assert!(grants_access("active"));
        assert!(!grants_access("pending"));
        assert!(!grants_access("inactive"));
        assert!(!grants_access("unknown"));
    }

    #[test]
    fn test_validate_status_rejects_unknown() {
        let result = validate_status("revoked");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid collaboration status"));
    }

    #[test]
    fn test_validate_status_accepts_known() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
    }

    #[test]
    fn test_permissions_constructors() {
        let full = Permissions::full();
        assert!(full.view && full.edit && full.delete);

        let none = Permissions::none();
        assert!(!none.view && !none.edit && !none.delete);

        let view_only = Permissions::view_only();
        assert!(view_only.view && !view_only.edit && !view_only.delete);
    }

    #[test]
    fn test_permissions_default_is_none() {
        assert_eq!(Permissions::default(), Permissions::none());
    }

    #[test]
    fn test_permissions_serde_round_trip() {
        let perms = Permissions {
            view: true,
            edit: false,
            delete: true,
        };
        let json = serde_json::to_string(&perms).unwrap();
        let back: Permissions = serde_json::from_str(&json).unwrap();
        assert_eq!(perms, back);
    }

    #[test]
    fn test_permissions_missing_flags_deserialize_false() {
        let perms: Permissions = serde_json::from_str(r#"{"view": true}"#).unwrap();
        assert!(perms.view);
        assert!(!perms.edit);
        assert!(!perms.delete);
    }
}
