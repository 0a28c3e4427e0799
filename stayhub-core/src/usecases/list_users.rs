use super::{authorize::require_role, prelude::*};

pub fn list_users<R>(repo: &R, admin: &User) -> Result<Vec<User>>
where
    R: UserRepo,
{
    require_role(admin, Role::Admin)?;
    Ok(repo.all_users()?)
}
