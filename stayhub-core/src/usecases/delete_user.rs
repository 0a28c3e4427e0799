use super::{authorize::require_owner_or_admin, prelude::*};

/// Removes the user record. Bookings and reviews of the account are
/// deliberately left in place.
pub fn delete_user<R>(repo: &R, caller: &User, target_user_id: &str) -> Result<()>
where
    R: UserRepo,
{
    require_owner_or_admin(caller, &target_user_id.into())?;
    log::info!("Deleting user {}", target_user_id);
    Ok(repo.delete_user(target_user_id)?)
}
