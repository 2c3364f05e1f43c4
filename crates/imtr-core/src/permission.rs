//! # Permission Tokens
//!
//! Defines the closed vocabulary of `resource:action` permission tokens.
//! Which role holds which tokens is declared once, in `imtr-access`; this
//! module only owns the vocabulary itself.
//!
//! The `_own` action suffix marks ownership-scoped grants: a lecturer
//! with `courses:write_own` may edit the courses they teach, not the
//! whole catalogue.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// One granted capability, in `resource:action` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// `students:read`
    #[serde(rename = "students:read")]
    StudentsRead,
    /// `students:write`
    #[serde(rename = "students:write")]
    StudentsWrite,
    /// `students:delete`
    #[serde(rename = "students:delete")]
    StudentsDelete,
    /// `lecturers:read`
    #[serde(rename = "lecturers:read")]
    LecturersRead,
    /// `lecturers:write`
    #[serde(rename = "lecturers:write")]
    LecturersWrite,
    /// `lecturers:delete`
    #[serde(rename = "lecturers:delete")]
    LecturersDelete,
    /// `courses:read`
    #[serde(rename = "courses:read")]
    CoursesRead,
    /// `courses:write`
    #[serde(rename = "courses:write")]
    CoursesWrite,
    /// `courses:write_own`
    #[serde(rename = "courses:write_own")]
    CoursesWriteOwn,
    /// `departments:read`
    #[serde(rename = "departments:read")]
    DepartmentsRead,
    /// `departments:write`
    #[serde(rename = "departments:write")]
    DepartmentsWrite,
    /// `faculties:read`
    #[serde(rename = "faculties:read")]
    FacultiesRead,
    /// `faculties:write`
    #[serde(rename = "faculties:write")]
    FacultiesWrite,
    /// `assessments:read`
    #[serde(rename = "assessments:read")]
    AssessmentsRead,
    /// `assessments:write`
    #[serde(rename = "assessments:write")]
    AssessmentsWrite,
    /// `assessments:grade`
    #[serde(rename = "assessments:grade")]
    AssessmentsGrade,
    /// `fees:read`
    #[serde(rename = "fees:read")]
    FeesRead,
    /// `fees:write`
    #[serde(rename = "fees:write")]
    FeesWrite,
    /// `finance:read`
    #[serde(rename = "finance:read")]
    FinanceRead,
    /// `finance:write`
    #[serde(rename = "finance:write")]
    FinanceWrite,
    /// `finance:reports`
    #[serde(rename = "finance:reports")]
    FinanceReports,
    /// `library:read`
    #[serde(rename = "library:read")]
    LibraryRead,
    /// `library:write`
    #[serde(rename = "library:write")]
    LibraryWrite,
    /// `library:lend`
    #[serde(rename = "library:lend")]
    LibraryLend,
    /// `research:read`
    #[serde(rename = "research:read")]
    ResearchRead,
    /// `research:write_own`
    #[serde(rename = "research:write_own")]
    ResearchWriteOwn,
    /// `users:read`
    #[serde(rename = "users:read")]
    UsersRead,
    /// `users:write`
    #[serde(rename = "users:write")]
    UsersWrite,
    /// `users:delete`
    #[serde(rename = "users:delete")]
    UsersDelete,
    /// `system:admin`
    #[serde(rename = "system:admin")]
    SystemAdmin,
    /// `system:audit`
    #[serde(rename = "system:audit")]
    SystemAudit,
    /// `profile:read`
    #[serde(rename = "profile:read")]
    ProfileRead,
    /// `profile:write`
    #[serde(rename = "profile:write")]
    ProfileWrite,
    /// `notifications:read`
    #[serde(rename = "notifications:read")]
    NotificationsRead,
    /// `notifications:send`
    #[serde(rename = "notifications:send")]
    NotificationsSend,
    /// `reports:read`
    #[serde(rename = "reports:read")]
    ReportsRead,
}

impl Permission {
    /// Returns every permission token in canonical order.
    pub fn all_permissions() -> &'static [Permission] {
        &[
            Self::StudentsRead,
            Self::StudentsWrite,
            Self::StudentsDelete,
            Self::LecturersRead,
            Self::LecturersWrite,
            Self::LecturersDelete,
            Self::CoursesRead,
            Self::CoursesWrite,
            Self::CoursesWriteOwn,
            Self::DepartmentsRead,
            Self::DepartmentsWrite,
            Self::FacultiesRead,
            Self::FacultiesWrite,
            Self::AssessmentsRead,
            Self::AssessmentsWrite,
            Self::AssessmentsGrade,
            Self::FeesRead,
            Self::FeesWrite,
            Self::FinanceRead,
            Self::FinanceWrite,
            Self::FinanceReports,
            Self::LibraryRead,
            Self::LibraryWrite,
            Self::LibraryLend,
            Self::ResearchRead,
            Self::ResearchWriteOwn,
            Self::UsersRead,
            Self::UsersWrite,
            Self::UsersDelete,
            Self::SystemAdmin,
            Self::SystemAudit,
            Self::ProfileRead,
            Self::ProfileWrite,
            Self::NotificationsRead,
            Self::NotificationsSend,
            Self::ReportsRead,
        ]
    }

    /// Returns the `resource:action` token, matching the serde format
    /// and the strings the route guards receive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudentsRead => "students:read",
            Self::StudentsWrite => "students:write",
            Self::StudentsDelete => "students:delete",
            Self::LecturersRead => "lecturers:read",
            Self::LecturersWrite => "lecturers:write",
            Self::LecturersDelete => "lecturers:delete",
            Self::CoursesRead => "courses:read",
            Self::CoursesWrite => "courses:write",
            Self::CoursesWriteOwn => "courses:write_own",
            Self::DepartmentsRead => "departments:read",
            Self::DepartmentsWrite => "departments:write",
            Self::FacultiesRead => "faculties:read",
            Self::FacultiesWrite => "faculties:write",
            Self::AssessmentsRead => "assessments:read",
            Self::AssessmentsWrite => "assessments:write",
            Self::AssessmentsGrade => "assessments:grade",
            Self::FeesRead => "fees:read",
            Self::FeesWrite => "fees:write",
            Self::FinanceRead => "finance:read",
            Self::FinanceWrite => "finance:write",
            Self::FinanceReports => "finance:reports",
            Self::LibraryRead => "library:read",
            Self::LibraryWrite => "library:write",
            Self::LibraryLend => "library:lend",
            Self::ResearchRead => "research:read",
            Self::ResearchWriteOwn => "research:write_own",
            Self::UsersRead => "users:read",
            Self::UsersWrite => "users:write",
            Self::UsersDelete => "users:delete",
            Self::SystemAdmin => "system:admin",
            Self::SystemAudit => "system:audit",
            Self::ProfileRead => "profile:read",
            Self::ProfileWrite => "profile:write",
            Self::NotificationsRead => "notifications:read",
            Self::NotificationsSend => "notifications:send",
            Self::ReportsRead => "reports:read",
        }
    }

    /// The resource half of the token (before the colon).
    pub fn resource(&self) -> &'static str {
        let token = self.as_str();
        let colon = token.find(':').expect("every token contains a colon");
        &token[..colon]
    }

    /// The action half of the token (after the colon).
    pub fn action(&self) -> &'static str {
        let token = self.as_str();
        let colon = token.find(':').expect("every token contains a colon");
        &token[colon + 1..]
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ValidationError;

    /// Parse a permission from its `resource:action` token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::all_permissions()
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::UnknownPermission(s.to_string()))
    }
}
