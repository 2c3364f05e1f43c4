//! # The Canonical Role-Permission Table
//!
//! One static declaration per role. This module is the only place in the
//! workspace where a grant is written down; everything else queries it.
//!
//! Lecturer writes to courses and research are ownership-scoped
//! (`courses:write_own`, `research:write_own`): a lecturer edits what
//! they teach or author, not the whole catalogue. The unscoped
//! `courses:write` belongs to ADMIN alone.

use imtr_core::Permission::{self, *};
use imtr_core::Role;

const ADMIN: &[Permission] = &[
    StudentsRead,
    StudentsWrite,
    StudentsDelete,
    LecturersRead,
    LecturersWrite,
    LecturersDelete,
    CoursesRead,
    CoursesWrite,
    DepartmentsRead,
    DepartmentsWrite,
    FacultiesRead,
    FacultiesWrite,
    AssessmentsRead,
    AssessmentsWrite,
    FeesRead,
    FeesWrite,
    FinanceRead,
    FinanceWrite,
    FinanceReports,
    LibraryRead,
    LibraryWrite,
    ResearchRead,
    UsersRead,
    UsersWrite,
    UsersDelete,
    SystemAdmin,
    SystemAudit,
    ProfileRead,
    ProfileWrite,
    NotificationsRead,
    NotificationsSend,
    ReportsRead,
];

const LECTURER: &[Permission] = &[
    StudentsRead,
    CoursesRead,
    CoursesWriteOwn,
    AssessmentsRead,
    AssessmentsWrite,
    AssessmentsGrade,
    ResearchRead,
    ResearchWriteOwn,
    ProfileRead,
    ProfileWrite,
    NotificationsRead,
    ReportsRead,
];

const STUDENT: &[Permission] = &[
    CoursesRead,
    AssessmentsRead,
    FeesRead,
    LibraryRead,
    ProfileRead,
    ProfileWrite,
    NotificationsRead,
];

const FINANCE: &[Permission] = &[
    StudentsRead,
    FeesRead,
    FeesWrite,
    FinanceRead,
    FinanceWrite,
    FinanceReports,
    ProfileRead,
    ProfileWrite,
    NotificationsRead,
    ReportsRead,
];

const LIBRARIAN: &[Permission] = &[
    StudentsRead,
    LibraryRead,
    LibraryWrite,
    LibraryLend,
    ProfileRead,
    ProfileWrite,
    NotificationsRead,
];

const IT: &[Permission] = &[
    UsersRead,
    UsersWrite,
    SystemAudit,
    ProfileRead,
    ProfileWrite,
    NotificationsRead,
    NotificationsSend,
    ReportsRead,
];

/// The permissions granted to `role`.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => ADMIN,
        Role::Lecturer => LECTURER,
        Role::Student => STUDENT,
        Role::Finance => FINANCE,
        Role::Librarian => LIBRARIAN,
        Role::It => IT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_grant() {
        for role in Role::all_roles() {
            assert!(!permissions_for(*role).is_empty(), "role: {role}");
        }
    }

    #[test]
    fn test_no_duplicate_grants_within_a_role() {
        for role in Role::all_roles() {
            let grant = permissions_for(*role);
            let unique: std::collections::HashSet<_> = grant.iter().collect();
            assert_eq!(unique.len(), grant.len(), "role: {role}");
        }
    }

    #[test]
    fn test_every_permission_granted_somewhere() {
        // A token no role holds is dead vocabulary.
        for permission in Permission::all_permissions() {
            let held = Role::all_roles()
                .iter()
                .any(|r| permissions_for(*r).contains(permission));
            assert!(held, "permission {permission} granted to no role");
        }
    }

    #[test]
    fn test_unscoped_course_write_is_admin_only() {
        for role in Role::all_roles() {
            let has_unscoped = permissions_for(*role).contains(&Permission::CoursesWrite);
            assert_eq!(has_unscoped, *role == Role::Admin, "role: {role}");
        }
    }

    #[test]
    fn test_everyone_can_read_their_profile() {
        for role in Role::all_roles() {
            assert!(
                permissions_for(*role).contains(&Permission::ProfileRead),
                "role: {role}"
            );
        }
    }
}
