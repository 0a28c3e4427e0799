use super::{host_status::HostStatus, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct NewHostApplication {
    pub about: String,
    pub location: String,
    pub experience: String,
}

/// Self-service transition from `user` to `host`.
///
/// Applications are approved in the same step: the `pending` state is
/// skipped entirely and no admin review takes place. Only users that
/// already hold the host role are turned away.
pub fn apply_to_become_host<R>(
    repo: &R,
    user_id: &str,
    application: NewHostApplication,
) -> Result<HostStatus>
where
    R: UserRepo,
{
    let Some(mut user) = repo.try_get_user(user_id)? else {
        return Err(Error::UserDoesNotExist);
    };
    if user.role == Role::Host {
        return Err(Error::AlreadyHost);
    }
    let NewHostApplication {
        about,
        location,
        experience,
    } = application;
    user.host_application = HostApplication {
        status: ApplicationStatus::Approved,
        submitted_at: Some(Timestamp::now()),
        info: Some(HostInfo {
            about,
            location,
            experience,
        }),
    };
    user.role = Role::Host;
    repo.update_user(&user)?;
    log::info!("User {} is now a host", user.id);
    Ok(HostStatus::from(&user))
}
