//! # Permission Queries
//!
//! Boolean membership questions over the canonical table. The typed
//! functions are total; the `_named` variants accept raw strings from
//! tokens or query parameters and treat anything unknown as "not
//! granted" rather than erroring.

use imtr_core::{Permission, Role};

use crate::table::permissions_for;

/// Does `role` hold `permission`?
pub fn has_permission(role: Role, permission: Permission) -> bool {
    let granted = permissions_for(role).contains(&permission);
    tracing::debug!(role = %role, permission = %permission, granted, "permission check");
    granted
}

/// Does `role` hold at least one of `permissions`?
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// The permissions granted to the role named `role`, or an empty slice
/// when the name matches no role.
pub fn permissions_for_name(role: &str) -> &'static [Permission] {
    match role.parse::<Role>() {
        Ok(role) => permissions_for(role),
        Err(_) => &[],
    }
}

/// String-boundary check: unknown role or permission tokens answer
/// `false`, never an error.
pub fn has_permission_named(role: &str, permission: &str) -> bool {
    let (Ok(role), Ok(permission)) = (role.parse::<Role>(), permission.parse::<Permission>())
    else {
        return false;
    };
    has_permission(role, permission)
}
