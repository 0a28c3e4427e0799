use super::{authorize::require_owner_or_admin, prelude::*};

/// Deletes a review and returns the listing id so the caller can
/// recompute the listing rating over the remaining reviews.
pub fn delete_review<R>(repo: &R, caller: &User, review_id: &str) -> Result<Id>
where
    R: ReviewRepo,
{
    let review = repo.get_review(review_id)?;
    require_owner_or_admin(caller, &review.user_id)?;
    repo.delete_review(review_id)?;
    Ok(review.listing_id)
}
