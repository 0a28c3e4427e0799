use super::{authorize::require_role, prelude::*};

/// Parses a caller-supplied decision string.
pub fn parse_application_decision(decision: &str) -> Result<ApplicationDecision> {
    decision
        .parse()
        .map_err(|_| Error::Decision(decision.to_string()))
}

/// Admin verdict on a *pending* host application.
///
/// Self-service applications never pass through the pending state, so
/// this only applies to users whose application was put into `pending`
/// by an import or another administrative path.
pub fn process_host_application<R>(
    repo: &R,
    admin: &User,
    target_user_id: &str,
    decision: ApplicationDecision,
) -> Result<User>
where
    R: UserRepo,
{
    require_role(admin, Role::Admin)?;
    let Some(mut user) = repo.try_get_user(target_user_id)? else {
        return Err(Error::UserDoesNotExist);
    };
    if user.host_application.status != ApplicationStatus::Pending {
        return Err(Error::NoPendingApplication);
    }
    user.host_application.status = decision.into();
    if decision == ApplicationDecision::Approved {
        user.role = Role::Host;
    }
    repo.update_user(&user)?;
    log::info!(
        "Host application of user {} has been {}",
        user.id,
        decision
    );
    Ok(user)
}
