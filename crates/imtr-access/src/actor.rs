//! # Actors
//!
//! The authenticated subject a guard evaluates: an identifier plus the
//! single role the user holds. Role membership is plain equality; there
//! is no hierarchy (a LECTURER is not a STUDENT plus extras).

use serde::{Deserialize, Serialize};

use imtr_core::{Permission, Role};

use crate::query;

/// An authenticated user as seen by the permission layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The user's identifier, e.g. `STU000042`.
    pub id: String,
    /// The single role the user holds.
    pub role: Role,
}

impl Actor {
    /// An actor with the given identifier and role.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), role }
    }

    /// Does this actor hold exactly `role`?
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Does this actor's role appear in `roles`?
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// Does this actor's role grant `permission`?
    pub fn can(&self, permission: Permission) -> bool {
        query::has_permission(self.role, permission)
    }
}
