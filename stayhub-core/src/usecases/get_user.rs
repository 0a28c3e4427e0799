use super::{authorize::require_owner_or_admin, prelude::*};

pub fn get_user<R>(repo: &R, caller: &User, requested_user_id: &str) -> Result<User>
where
    R: UserRepo,
{
    require_owner_or_admin(caller, &requested_user_id.into())?;
    repo.try_get_user(requested_user_id)?
        .ok_or(Error::UserDoesNotExist)
}
