use super::prelude::*;
use crate::rating::Rated;

/// Recomputes the denormalized rating of a listing from its current
/// reviews and writes it back.
///
/// The read-all-then-write-one sequence is not atomic with the review
/// write that triggered it: concurrent review writes for the same
/// listing race and the last writer wins on the `rating` field.
///
/// A listing whose last review was deleted keeps its previous rating.
pub fn refresh_listing_rating<D>(db: &D, listing_id: &str) -> Result<Option<AvgRating>>
where
    D: ListingRepo + ReviewRepo,
{
    let mut listing = db.get_listing(listing_id)?;
    let reviews = db.reviews_of_listing(listing_id)?;
    let Some(rating) = listing.avg_rating(&reviews) else {
        return Ok(listing.rating);
    };
    listing.rating = Some(rating);
    db.update_listing(&listing)?;
    Ok(Some(rating))
}
