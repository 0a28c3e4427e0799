use super::{authorize::require_owner_or_admin, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
}

/// Updates the profile of `target_user_id`. Used both by users editing
/// their own account and by admins editing arbitrary accounts.
pub fn update_user_profile<R>(
    repo: &R,
    caller: &User,
    target_user_id: &str,
    update: ProfileUpdate,
) -> Result<User>
where
    R: UserRepo,
{
    require_owner_or_admin(caller, &target_user_id.into())?;
    let Some(mut user) = repo.try_get_user(target_user_id)? else {
        return Err(Error::UserDoesNotExist);
    };
    if let Some(username) = update.username {
        if username.trim().is_empty() {
            return Err(Error::Username);
        }
        user.username = username;
    }
    if let Some(email) = update.email {
        if let Some(other) = repo.try_get_user_by_email(&email)? {
            if other.id != user.id {
                return Err(Error::UserExists);
            }
        }
        user.email = email;
    }
    if let Some(phone) = update.phone {
        if let Some(other) = repo.try_get_user_by_phone(&phone)? {
            if other.id != user.id {
                return Err(Error::PhoneNumberExists);
            }
        }
        user.phone = phone;
    }
    repo.update_user(&user)?;
    Ok(user)
}
