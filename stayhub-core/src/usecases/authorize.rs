use super::prelude::*;
use crate::authorization::user::{authorize_owner_or_admin, authorize_role};

/// Loads a user and checks its role against the required minimum.
///
/// A missing user is an authentication failure, an insufficient role an
/// authorization failure.
pub fn authorize_user_by_id<R: UserRepo>(
    repo: &R,
    user_id: &str,
    min_required_role: Role,
) -> Result<User> {
    let Some(user) = repo.try_get_user(user_id)? else {
        return Err(Error::Unauthorized);
    };
    authorize_role(&user, min_required_role).map_err(|_| Error::RoleRequired(min_required_role))?;
    Ok(user)
}

pub(crate) fn require_role(user: &User, min_required_role: Role) -> Result<()> {
    authorize_role(user, min_required_role).map_err(|_| Error::RoleRequired(min_required_role))
}

pub(crate) fn require_owner_or_admin(user: &User, owner_id: &Id) -> Result<()> {
    authorize_owner_or_admin(user, owner_id).map_err(|_| Error::Forbidden)
}
