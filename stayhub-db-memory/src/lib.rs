//! # stayhub-db-memory
//!
//! An in-process document store for stayhub. All collections live in
//! memory behind `RwLock`s; persistence across runs is handled by the
//! snapshot import/export of the CLI shell.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use stayhub_core::{
    db::Db,
    entities::*,
    repositories::{Error as RepoError, *},
};

type Result<T> = std::result::Result<T, RepoError>;

trait Record {
    fn id(&self) -> &str;
}

impl Record for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Listing {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Review {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

fn read<T>(collection: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>> {
    collection
        .read()
        .map_err(|_| RepoError::Other(anyhow!("storage lock poisoned")))
}

fn write<T>(collection: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
    collection
        .write()
        .map_err(|_| RepoError::Other(anyhow!("storage lock poisoned")))
}

fn get<T: Clone + Record>(records: &[T], id: &str) -> Result<T> {
    match records.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Record>(records: &mut Vec<T>, r: T) -> Result<()> {
    if records.iter().any(|x| x.id() == r.id()) {
        return Err(RepoError::AlreadyExists);
    }
    records.push(r);
    Ok(())
}

fn update<T: Clone + Record>(records: &mut Vec<T>, r: &T) -> Result<()> {
    if let Some(pos) = records.iter().position(|x| x.id() == r.id()) {
        records[pos] = r.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Record>(records: &mut Vec<T>, id: &str) -> Result<()> {
    if let Some(pos) = records.iter().position(|x| x.id() == id) {
        records.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct MemoryDb {
    users: RwLock<Vec<User>>,
    listings: RwLock<Vec<Listing>>,
    bookings: RwLock<Vec<Booking>>,
    reviews: RwLock<Vec<Review>>,
    access_tokens: RwLock<Vec<AccessToken>>,
}

impl UserRepo for MemoryDb {
    fn create_user(&self, user: &User) -> Result<()> {
        create(&mut *write(&self.users)?, user.clone())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        update(&mut *write(&self.users)?, user)
    }

    fn delete_user(&self, id: &str) -> Result<()> {
        delete(&mut *write(&self.users)?, id)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get(&read(&self.users)?, id)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(read(&self.users)?
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(read(&self.users)?
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn try_get_user_by_phone(&self, phone: &str) -> Result<Option<User>> {
        Ok(read(&self.users)?
            .iter()
            .find(|u| u.phone == phone)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(read(&self.users)?.clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(read(&self.users)?.len())
    }
}

impl ListingRepo for MemoryDb {
    fn create_listing(&self, listing: &Listing) -> Result<()> {
        create(&mut *write(&self.listings)?, listing.clone())
    }

    fn update_listing(&self, listing: &Listing) -> Result<()> {
        update(&mut *write(&self.listings)?, listing)
    }

    fn delete_listing(&self, id: &str) -> Result<()> {
        delete(&mut *write(&self.listings)?, id)
    }

    fn get_listing(&self, id: &str) -> Result<Listing> {
        get(&read(&self.listings)?, id)
    }

    fn listings_of_host(&self, host_id: &str) -> Result<Vec<Listing>> {
        Ok(read(&self.listings)?
            .iter()
            .filter(|l| l.host_id.as_str() == host_id)
            .cloned()
            .collect())
    }

    fn all_listings(&self) -> Result<Vec<Listing>> {
        Ok(read(&self.listings)?.clone())
    }

    fn count_listings(&self) -> Result<usize> {
        Ok(read(&self.listings)?.len())
    }
}

impl BookingRepo for MemoryDb {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        create(&mut *write(&self.bookings)?, booking.clone())
    }

    fn update_booking(&self, booking: &Booking) -> Result<()> {
        update(&mut *write(&self.bookings)?, booking)
    }

    fn get_booking(&self, id: &str) -> Result<Booking> {
        get(&read(&self.bookings)?, id)
    }

    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        Ok(read(&self.bookings)?
            .iter()
            .filter(|b| b.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn bookings_of_user_at_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<Vec<Booking>> {
        Ok(read(&self.bookings)?
            .iter()
            .filter(|b| b.user_id.as_str() == user_id && b.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }

    fn all_bookings(&self) -> Result<Vec<Booking>> {
        Ok(read(&self.bookings)?.clone())
    }

    fn count_bookings(&self) -> Result<usize> {
        Ok(read(&self.bookings)?.len())
    }
}

impl ReviewRepo for MemoryDb {
    fn create_review(&self, review: &Review) -> Result<()> {
        create(&mut *write(&self.reviews)?, review.clone())
    }

    fn update_review(&self, review: &Review) -> Result<()> {
        update(&mut *write(&self.reviews)?, review)
    }

    fn delete_review(&self, id: &str) -> Result<()> {
        delete(&mut *write(&self.reviews)?, id)
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get(&read(&self.reviews)?, id)
    }

    fn reviews_of_listing(&self, listing_id: &str) -> Result<Vec<Review>> {
        Ok(read(&self.reviews)?
            .iter()
            .filter(|r| r.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }

    fn try_get_review_of_user_for_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<Option<Review>> {
        Ok(read(&self.reviews)?
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.listing_id.as_str() == listing_id)
            .cloned())
    }

    fn all_reviews(&self) -> Result<Vec<Review>> {
        Ok(read(&self.reviews)?.clone())
    }

    fn count_reviews(&self) -> Result<usize> {
        Ok(read(&self.reviews)?.len())
    }
}

impl AccessTokenRepo for MemoryDb {
    fn replace_access_token(&self, token: AccessToken) -> Result<UserNonce> {
        let mut tokens = write(&self.access_tokens)?;
        tokens.retain(|t| t.user_nonce.user_id != token.user_nonce.user_id);
        let user_nonce = token.user_nonce.clone();
        tokens.push(token);
        Ok(user_nonce)
    }

    fn get_access_token_by_user(&self, user_id: &str) -> Result<AccessToken> {
        read(&self.access_tokens)?
            .iter()
            .find(|t| t.user_nonce.user_id.as_str() == user_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn delete_expired_access_tokens(&self, expired_before: Timestamp) -> Result<usize> {
        let mut tokens = write(&self.access_tokens)?;
        let count_before = tokens.len();
        tokens.retain(|t| t.expires_at >= expired_before);
        Ok(count_before - tokens.len())
    }
}

impl Db for MemoryDb {}
