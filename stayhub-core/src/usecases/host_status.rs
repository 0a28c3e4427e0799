use super::prelude::*;

/// Snapshot of a user's host application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStatus {
    pub status: ApplicationStatus,
    pub submitted_at: Option<Timestamp>,
    pub role: Role,
    pub info: Option<HostInfo>,
}

impl From<&User> for HostStatus {
    fn from(from: &User) -> Self {
        Self {
            status: from.host_application.status,
            submitted_at: from.host_application.submitted_at,
            role: from.role,
            info: from.host_application.info.clone(),
        }
    }
}

pub fn host_application_status<R>(repo: &R, user_id: &str) -> Result<HostStatus>
where
    R: UserRepo,
{
    let Some(user) = repo.try_get_user(user_id)? else {
        return Err(Error::UserDoesNotExist);
    };
    Ok(HostStatus::from(&user))
}
