use std::{cell::RefCell, result};

use crate::{
    db::Db,
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

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

fn get<T: Clone + Record>(records: &[T], id: &str) -> RepoResult<T> {
    match records.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Record>(records: &mut Vec<T>, r: T) -> RepoResult<()> {
    if records.iter().any(|x| x.id() == r.id()) {
        return Err(RepoError::AlreadyExists);
    }
    records.push(r);
    Ok(())
}

fn update<T: Clone + Record>(records: &mut Vec<T>, r: &T) -> RepoResult<()> {
    if let Some(pos) = records.iter().position(|x| x.id() == r.id()) {
        records[pos] = r.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Record>(records: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = records.iter().position(|x| x.id() == id) {
        records.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub listings: RefCell<Vec<Listing>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub reviews: RefCell<Vec<Review>>,
    pub access_tokens: RefCell<Vec<AccessToken>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }

    fn delete_user(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn try_get_user_by_phone(&self, phone: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.phone == phone)
            .cloned())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        self.all_users().map(|v| v.len())
    }
}

impl ListingRepo for MockDb {
    fn create_listing(&self, listing: &Listing) -> RepoResult<()> {
        create(&mut self.listings.borrow_mut(), listing.clone())
    }

    fn update_listing(&self, listing: &Listing) -> RepoResult<()> {
        update(&mut self.listings.borrow_mut(), listing)
    }

    fn delete_listing(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.listings.borrow_mut(), id)
    }

    fn get_listing(&self, id: &str) -> RepoResult<Listing> {
        get(&self.listings.borrow(), id)
    }

    fn listings_of_host(&self, host_id: &str) -> RepoResult<Vec<Listing>> {
        Ok(self
            .listings
            .borrow()
            .iter()
            .filter(|l| l.host_id.as_str() == host_id)
            .cloned()
            .collect())
    }

    fn all_listings(&self) -> RepoResult<Vec<Listing>> {
        Ok(self.listings.borrow().clone())
    }

    fn count_listings(&self) -> RepoResult<usize> {
        self.all_listings().map(|v| v.len())
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: &Booking) -> RepoResult<()> {
        create(&mut self.bookings.borrow_mut(), booking.clone())
    }

    fn update_booking(&self, booking: &Booking) -> RepoResult<()> {
        update(&mut self.bookings.borrow_mut(), booking)
    }

    fn get_booking(&self, id: &str) -> RepoResult<Booking> {
        get(&self.bookings.borrow(), id)
    }

    fn bookings_of_user(&self, user_id: &str) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn bookings_of_user_at_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.user_id.as_str() == user_id && b.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }

    fn all_bookings(&self) -> RepoResult<Vec<Booking>> {
        Ok(self.bookings.borrow().clone())
    }

    fn count_bookings(&self) -> RepoResult<usize> {
        self.all_bookings().map(|v| v.len())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        create(&mut self.reviews.borrow_mut(), review.clone())
    }

    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update(&mut self.reviews.borrow_mut(), review)
    }

    fn delete_review(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.reviews.borrow_mut(), id)
    }

    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }

    fn reviews_of_listing(&self, listing_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }

    fn try_get_review_of_user_for_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.listing_id.as_str() == listing_id)
            .cloned())
    }

    fn all_reviews(&self) -> RepoResult<Vec<Review>> {
        Ok(self.reviews.borrow().clone())
    }

    fn count_reviews(&self) -> RepoResult<usize> {
        self.all_reviews().map(|v| v.len())
    }
}

impl AccessTokenRepo for MockDb {
    fn replace_access_token(&self, token: AccessToken) -> RepoResult<UserNonce> {
        let mut tokens = self.access_tokens.borrow_mut();
        tokens.retain(|t| t.user_nonce.user_id != token.user_nonce.user_id);
        let user_nonce = token.user_nonce.clone();
        tokens.push(token);
        Ok(user_nonce)
    }

    fn get_access_token_by_user(&self, user_id: &str) -> RepoResult<AccessToken> {
        self.access_tokens
            .borrow()
            .iter()
            .find(|t| t.user_nonce.user_id.as_str() == user_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn delete_expired_access_tokens(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let mut tokens = self.access_tokens.borrow_mut();
        let count_before = tokens.len();
        tokens.retain(|t| t.expires_at >= expired_before);
        Ok(count_before - tokens.len())
    }
}

impl Db for MockDb {}
