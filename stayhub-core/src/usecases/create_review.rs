use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub listing_id: Id,
    pub rating: RatingValue,
    pub comment: String,
}

/// A validated review that is ready to be stored.
#[derive(Debug)]
pub struct Storable(Review);

impl Storable {
    pub fn review_id(&self) -> &Id {
        &self.0.id
    }
    pub fn listing_id(&self) -> &Id {
        &self.0.listing_id
    }
}

/// Proof of stay: the user holds a booking on the listing that is either
/// confirmed or completed. Admins may always review.
pub fn can_review<D>(db: &D, user: &User, listing_id: &str) -> Result<bool>
where
    D: BookingRepo,
{
    if user.role == Role::Admin {
        return Ok(true);
    }
    let bookings = db.bookings_of_user_at_listing(user.id.as_str(), listing_id)?;
    Ok(bookings.iter().any(|b| {
        matches!(
            b.status,
            BookingStatus::Confirmed | BookingStatus::Completed
        )
    }))
}

pub fn prepare_new_review<D>(db: &D, author: &User, new_review: NewReview) -> Result<Storable>
where
    D: ListingRepo + BookingRepo + ReviewRepo,
{
    let NewReview {
        listing_id,
        rating,
        comment,
    } = new_review;
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    if comment.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    let _ = db.get_listing(listing_id.as_str())?;
    if !can_review(db, author, listing_id.as_str())? {
        return Err(Error::NotEligibleToReview);
    }
    if db
        .try_get_review_of_user_for_listing(author.id.as_str(), listing_id.as_str())?
        .is_some()
    {
        return Err(Error::ReviewExists);
    }
    Ok(Storable(Review {
        id: Id::new(),
        listing_id,
        user_id: author.id.clone(),
        username: author.username.clone(),
        rating,
        comment,
        created_at: Timestamp::now(),
    }))
}

pub fn store_new_review<R>(repo: &R, storable: Storable) -> Result<Review>
where
    R: ReviewRepo,
{
    let Storable(review) = storable;
    repo.create_review(&review)?;
    Ok(review)
}
