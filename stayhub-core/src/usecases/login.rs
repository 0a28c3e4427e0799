use super::prelude::*;

#[derive(Debug)]
pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    Ok(u)
                } else {
                    Err(Error::Credentials)
                }
            } else {
                // An unknown address is reported just like a wrong password.
                Err(Error::Credentials)
            }
        })
}
