use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A one-way hashed password credential.
///
/// Parsing a string hashes it. The plain text is never stored and can only
/// be checked against the hash with [`Password::verify`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    /// Wraps an already hashed credential, e.g. when loading stored records.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        self.0.as_str()
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Password is too short")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Password, Self::Err> {
        if s.len() < Self::min_len() {
            return Err(ParseError::TooShort);
        }
        Ok(Self(bcrypt::hash(s)?))
    }
}
