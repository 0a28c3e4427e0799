use super::*;

pub fn register<D: Db>(db: &D, new_user: usecases::NewUser) -> Result<User> {
    Ok(usecases::register_user(db, new_user)?)
}

/// Checks the credentials and hands out a fresh access token, replacing
/// any token issued to the user before.
pub fn login<D: Db>(db: &D, credentials: &usecases::Credentials<'_>) -> Result<(String, User)> {
    let user = usecases::login_with_email(db, credentials)?;
    let user_nonce = usecases::issue_access_token(db, user.id.clone())?;
    Ok((user_nonce.encode_to_string(), user))
}

pub fn current_user<D: Db>(db: &D, token: &str) -> Result<User> {
    Ok(usecases::authenticate_token_holder(db, token)?)
}

/// Profile read: the own account, or any account for admins.
pub fn user_profile<D: Db>(db: &D, token: &str, user_id: &str) -> Result<User> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::get_user(db, &caller, user_id)?)
}

pub fn update_profile<D: Db>(
    db: &D,
    token: &str,
    target_user_id: &str,
    update: usecases::ProfileUpdate,
) -> Result<User> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::update_user_profile(
        db,
        &caller,
        target_user_id,
        update,
    )?)
}

pub fn delete_account<D: Db>(db: &D, token: &str, target_user_id: &str) -> Result<()> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::delete_user(db, &caller, target_user_id)?)
}

/// Periodic housekeeping, not tied to a caller.
pub fn purge_expired_tokens<D: Db>(db: &D) -> Result<usize> {
    Ok(usecases::delete_expired_access_tokens(db)?)
}
