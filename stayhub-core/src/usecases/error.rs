use crate::repositories;
use stayhub_entities::user::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The username is invalid")]
    Username,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid phone number")]
    PhoneNumber,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("The phone number is already in use")]
    PhoneNumberExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Access denied. {0} privileges required")]
    RoleRequired(Role),
    #[error("You are already a host")]
    AlreadyHost,
    #[error("No pending host application found for this user")]
    NoPendingApplication,
    #[error("Invalid host application decision: {0}")]
    Decision(String),
    #[error("Bed, bath and guest capacities must be at least one")]
    Capacity,
    #[error("The check-out date must be after the check-in")]
    EndDateBeforeStart,
    #[error("The guest count is invalid")]
    GuestCount,
    #[error("Rating must be between 1 and 5")]
    RatingValue,
    #[error("Comment is required")]
    EmptyComment,
    #[error("You must book and stay at this property before leaving a review")]
    NotEligibleToReview,
    #[error("You have already reviewed this property")]
    ReviewExists,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<stayhub_entities::password::ParseError> for Error {
    fn from(_: stayhub_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<stayhub_entities::email::EmailAddressParseError> for Error {
    fn from(_: stayhub_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<stayhub_entities::nonce::UserNonceDecodingError> for Error {
    fn from(_: stayhub_entities::nonce::UserNonceDecodingError) -> Self {
        Self::TokenInvalid
    }
}
