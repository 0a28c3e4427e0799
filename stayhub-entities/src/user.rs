use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id               : Id,
    pub username         : String,
    pub email            : EmailAddress,
    pub phone            : String,
    pub password         : Password,
    pub role             : Role,
    pub host_application : HostApplication,
    pub created_at       : Timestamp,
}

impl User {
    /// Whether a host application has ever been submitted for this user.
    pub fn has_applied(&self) -> bool {
        self.host_application.status != ApplicationStatus::None
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    User  = 0,
    Host  = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

/// Host application sub-state of a user.
///
/// `Role::Host` implies `ApplicationStatus::Approved`, but not the other
/// way around: a rejected applicant keeps the plain user role.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HostApplication {
    pub status: ApplicationStatus,
    pub submitted_at: Option<Timestamp>,
    pub info: Option<HostInfo>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApplicationStatus {
    None,
    Pending,
    Approved,
    Rejected,
}

impl Default for ApplicationStatus {
    fn default() -> ApplicationStatus {
        ApplicationStatus::None
    }
}

/// Self-description submitted with a host application.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub about: String,
    pub location: String,
    pub experience: String,
}

/// An admin verdict on a pending host application.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApplicationDecision {
    Approved,
    Rejected,
}

impl From<ApplicationDecision> for ApplicationStatus {
    fn from(from: ApplicationDecision) -> Self {
        match from {
            ApplicationDecision::Approved => ApplicationStatus::Approved,
            ApplicationDecision::Rejected => ApplicationStatus::Rejected,
        }
    }
}
