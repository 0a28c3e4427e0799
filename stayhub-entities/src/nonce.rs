use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::{id::Id, time::Timestamp};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nonce(Uuid);

impl Nonce {
    pub const STR_LEN: usize = 32;

    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for Nonce {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

impl From<Nonce> for Uuid {
    fn from(from: Nonce) -> Self {
        from.0
    }
}

#[derive(Debug)]
pub struct NonceParseError;

impl fmt::Display for NonceParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "Invalid nonce")
    }
}

impl FromStr for Nonce {
    type Err = NonceParseError;

    fn from_str(nonce_str: &str) -> Result<Self, Self::Err> {
        nonce_str
            .parse::<Uuid>()
            .map(Into::into)
            .map_err(|_| NonceParseError)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0.as_simple())
    }
}

/// The payload of an access credential: which user it belongs to and a
/// one-time random component. The encoded string form is what callers
/// present as their opaque token. It carries no role or other claims.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserNonce {
    pub user_id: Id,
    pub nonce: Nonce,
}

pub type ActualTokenLen = usize;
pub type NonceString = String;

#[derive(Debug)]
pub enum UserNonceDecodingError {
    Bs58(bs58::decode::Error),
    Utf8(std::string::FromUtf8Error),
    TooShort(ActualTokenLen),
    Parse(NonceString, NonceParseError),
}

impl UserNonce {
    pub fn encode_to_string(&self) -> String {
        let nonce = self.nonce.to_string();
        debug_assert_eq!(Nonce::STR_LEN, nonce.len());
        let mut concat = String::with_capacity(self.user_id.as_str().len() + nonce.len());
        concat += self.user_id.as_str();
        concat += &nonce;
        bs58::encode(concat).into_string()
    }

    pub fn decode_from_str(encoded: &str) -> Result<UserNonce, UserNonceDecodingError> {
        let decoded = bs58::decode(encoded)
            .into_vec()
            .map_err(UserNonceDecodingError::Bs58)?;
        let mut concat = String::from_utf8(decoded).map_err(UserNonceDecodingError::Utf8)?;
        if concat.len() < Nonce::STR_LEN {
            return Err(UserNonceDecodingError::TooShort(concat.len()));
        }
        let user_id_len = concat.len() - Nonce::STR_LEN;
        let nonce_slice: &str = &concat[user_id_len..];
        let nonce = nonce_slice
            .parse::<Nonce>()
            .map_err(|err| UserNonceDecodingError::Parse(nonce_slice.into(), err))?;
        concat.truncate(user_id_len);
        let user_id = concat.into();
        Ok(Self { user_id, nonce })
    }
}

/// A stored access credential with its expiry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AccessToken {
    pub user_nonce: UserNonce,
    pub expires_at: Timestamp,
}
