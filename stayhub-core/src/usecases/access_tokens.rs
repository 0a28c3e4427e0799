use super::prelude::*;
use crate::repositories::Error as RepoError;
use time::Duration;

pub fn issue_access_token<R: AccessTokenRepo>(repo: &R, user_id: Id) -> Result<UserNonce> {
    let user_nonce = UserNonce {
        user_id,
        nonce: Nonce::new(),
    };
    let token = AccessToken {
        user_nonce,
        expires_at: Timestamp::now() + Duration::days(1),
    };
    Ok(repo.replace_access_token(token)?)
}

/// Resolves an encoded token back to the user it was issued for.
///
/// The token only identifies the user. Role and application state are
/// always read back from the user record so that a role change takes
/// effect on the next request.
pub fn authenticate_token_holder<D>(db: &D, encoded: &str) -> Result<User>
where
    D: AccessTokenRepo + UserRepo,
{
    let user_nonce = UserNonce::decode_from_str(encoded)?;
    let token = match db.get_access_token_by_user(user_nonce.user_id.as_str()) {
        Ok(token) => token,
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        Err(err) => return Err(Error::Repo(err)),
    };
    if token.user_nonce != user_nonce {
        return Err(Error::TokenInvalid);
    }
    if token.expires_at < Timestamp::now() {
        return Err(Error::TokenExpired);
    }
    match db.try_get_user(user_nonce.user_id.as_str())? {
        Some(user) => Ok(user),
        None => Err(Error::TokenInvalid),
    }
}

pub fn delete_expired_access_tokens<R: AccessTokenRepo>(repo: &R) -> Result<usize> {
    let expired_before = Timestamp::now();
    Ok(repo.delete_expired_access_tokens(expired_before)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use stayhub_entities::builders::*;

    #[test]
    fn issue_and_authenticate() {
        let db = MockDb::default();
        let user = User::build().username("alice").finish();
        db.create_user(&user).unwrap();
        let user_nonce = issue_access_token(&db, user.id.clone()).unwrap();
        let encoded = user_nonce.encode_to_string();
        let authenticated = authenticate_token_holder(&db, &encoded).unwrap();
        assert_eq!(user.id, authenticated.id);
    }

    #[test]
    fn reject_garbage_token() {
        let db = MockDb::default();
        assert!(matches!(
            authenticate_token_holder(&db, "not a token"),
            Err(Error::TokenInvalid)
        ));
    }

    #[test]
    fn issuing_replaces_previous_token() {
        let db = MockDb::default();
        let user = User::build().finish();
        db.create_user(&user).unwrap();
        let first = issue_access_token(&db, user.id.clone()).unwrap();
        let second = issue_access_token(&db, user.id.clone()).unwrap();
        assert!(matches!(
            authenticate_token_holder(&db, &first.encode_to_string()),
            Err(Error::TokenInvalid)
        ));
        assert!(authenticate_token_holder(&db, &second.encode_to_string()).is_ok());
    }

    #[test]
    fn reject_expired_token() {
        let db = MockDb::default();
        let user = User::build().finish();
        db.create_user(&user).unwrap();
        let user_nonce = issue_access_token(&db, user.id.clone()).unwrap();
        let expired = AccessToken {
            user_nonce: user_nonce.clone(),
            expires_at: Timestamp::now() + Duration::days(-1),
        };
        db.replace_access_token(expired).unwrap();
        assert!(matches!(
            authenticate_token_holder(&db, &user_nonce.encode_to_string()),
            Err(Error::TokenExpired)
        ));
    }

    #[test]
    fn delete_expired_tokens() {
        let db = MockDb::default();
        let expired = AccessToken {
            user_nonce: UserNonce {
                user_id: Id::new(),
                nonce: Nonce::new(),
            },
            expires_at: Timestamp::now() + Duration::days(-1),
        };
        db.replace_access_token(expired).unwrap();
        assert_eq!(1, delete_expired_access_tokens(&db).unwrap());
    }
}
