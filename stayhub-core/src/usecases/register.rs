use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: EmailAddress,
    pub phone: String,
    pub password: String,
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    digits >= 5
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}

pub fn register_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if u.username.trim().is_empty() {
        return Err(Error::Username);
    }
    if !is_valid_phone(&u.phone) {
        return Err(Error::PhoneNumber);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    if repo.try_get_user_by_phone(&u.phone)?.is_some() {
        return Err(Error::PhoneNumberExists);
    }
    let new_user = User {
        id: Id::new(),
        username: u.username,
        email: u.email,
        phone: u.phone,
        password,
        role: Role::User,
        host_application: HostApplication::default(),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn new_user(email: &str, phone: &str) -> NewUser {
        NewUser {
            username: "alice".into(),
            email: email.parse().unwrap(),
            phone: phone.into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("foo@bar.de", "111 111")).is_ok());
        assert!(register_user(&db, new_user("baz@bar.de", "222 222")).is_ok());
        assert_eq!(db.count_users().unwrap(), 2);
    }

    #[test]
    fn reject_duplicate_email() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("foo@bar.de", "111 111")).is_ok());
        assert!(matches!(
            register_user(&db, new_user("foo@bar.de", "222 222")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn reject_duplicate_phone() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("foo@bar.de", "111 111")).is_ok());
        assert!(matches!(
            register_user(&db, new_user("baz@bar.de", "111 111")),
            Err(Error::PhoneNumberExists)
        ));
    }

    #[test]
    fn reject_invalid_password() {
        let db = MockDb::default();
        let mut u = new_user("foo@bar.de", "111 111");
        u.password = "short".into();
        assert!(matches!(register_user(&db, u), Err(Error::Password)));
    }

    #[test]
    fn reject_invalid_phone() {
        let db = MockDb::default();
        assert!(matches!(
            register_user(&db, new_user("foo@bar.de", "call me")),
            Err(Error::PhoneNumber)
        ));
    }
}
