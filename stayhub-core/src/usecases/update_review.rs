use super::{authorize::require_owner_or_admin, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<RatingValue>,
    pub comment: Option<String>,
}

/// Updates a review. Returns the review together with a flag telling the
/// caller whether the listing rating has to be recomputed.
///
/// An empty replacement comment is ignored rather than rejected.
pub fn update_review<R>(
    repo: &R,
    caller: &User,
    review_id: &str,
    update: ReviewUpdate,
) -> Result<(Review, bool)>
where
    R: ReviewRepo,
{
    if let Some(rating) = update.rating {
        if !rating.is_valid() {
            return Err(Error::RatingValue);
        }
    }
    let mut review = repo.get_review(review_id)?;
    require_owner_or_admin(caller, &review.user_id)?;
    let rating_changed = update.rating.is_some();
    if let Some(rating) = update.rating {
        review.rating = rating;
    }
    if let Some(comment) = update.comment {
        if !comment.trim().is_empty() {
            review.comment = comment;
        }
    }
    repo.update_review(&review)?;
    Ok((review, rating_changed))
}
