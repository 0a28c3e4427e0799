// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn try_get_user_by_phone(&self, phone: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait ListingRepo {
    fn create_listing(&self, listing: &Listing) -> Result<()>;
    fn update_listing(&self, listing: &Listing) -> Result<()>;
    fn delete_listing(&self, id: &str) -> Result<()>;

    fn get_listing(&self, id: &str) -> Result<Listing>;
    fn listings_of_host(&self, host_id: &str) -> Result<Vec<Listing>>;

    fn all_listings(&self) -> Result<Vec<Listing>>;
    fn count_listings(&self) -> Result<usize>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: &Booking) -> Result<()>;
    fn update_booking(&self, booking: &Booking) -> Result<()>;

    fn get_booking(&self, id: &str) -> Result<Booking>;
    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>>;
    fn bookings_of_user_at_listing(&self, user_id: &str, listing_id: &str)
        -> Result<Vec<Booking>>;

    fn all_bookings(&self) -> Result<Vec<Booking>>;
    fn count_bookings(&self) -> Result<usize>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn reviews_of_listing(&self, listing_id: &str) -> Result<Vec<Review>>;
    fn try_get_review_of_user_for_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<Option<Review>>;

    fn all_reviews(&self) -> Result<Vec<Review>>;
    fn count_reviews(&self) -> Result<usize>;
}

pub trait AccessTokenRepo {
    /// Stores the token, discarding any previous token of the same user.
    fn replace_access_token(&self, token: AccessToken) -> Result<UserNonce>;

    fn get_access_token_by_user(&self, user_id: &str) -> Result<AccessToken>;

    fn delete_expired_access_tokens(&self, expired_before: Timestamp) -> Result<usize>;
}
