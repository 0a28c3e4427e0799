use stayhub_entities::{
    id::Id,
    user::{Role, User},
};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("not the owner of the entity")]
    NotOwner,
}

pub type Result<T> = StdResult<T, Error>;

/// The request-time authorization predicate: evaluated against a freshly
/// loaded user record, never against cached or client-supplied role data.
pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

/// Passes for the owner of an entity and for admins.
pub fn authorize_owner_or_admin(user: &User, owner_id: &Id) -> Result<()> {
    if &user.id != owner_id && user.role < Role::Admin {
        return Err(Error::NotOwner);
    }
    Ok(())
}
