use super::prelude::*;
use itertools::Itertools;

/// Public read of all reviews of a listing, most recent first.
pub fn load_reviews_of_listing<R>(repo: &R, listing_id: &str) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    Ok(repo
        .reviews_of_listing(listing_id)?
        .into_iter()
        .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
        .collect())
}
