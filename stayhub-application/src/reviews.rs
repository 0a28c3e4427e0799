use super::*;

/// Persists a new review, then refreshes the listing's aggregate rating.
///
/// The refresh runs after the review write and is not atomic with it: if
/// it fails, the review stands and the stored rating goes stale until the
/// next successful recomputation.
pub fn create_review<D: Db>(db: &D, token: &str, new_review: usecases::NewReview) -> Result<Review> {
    let author = usecases::authenticate_token_holder(db, token)?;
    let storable = usecases::prepare_new_review(db, &author, new_review)?;
    let review = usecases::store_new_review(db, storable)?;
    if let Err(err) = usecases::refresh_listing_rating(db, review.listing_id.as_str()) {
        log::error!(
            "Failed to refresh rating of listing {} after new review: {}",
            review.listing_id,
            err
        );
    }
    Ok(review)
}

pub fn update_review<D: Db>(
    db: &D,
    token: &str,
    review_id: &str,
    update: usecases::ReviewUpdate,
) -> Result<Review> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    let (review, rating_changed) = usecases::update_review(db, &caller, review_id, update)?;
    if rating_changed {
        if let Err(err) = usecases::refresh_listing_rating(db, review.listing_id.as_str()) {
            log::error!(
                "Failed to refresh rating of listing {} after review update: {}",
                review.listing_id,
                err
            );
        }
    }
    Ok(review)
}

pub fn delete_review<D: Db>(db: &D, token: &str, review_id: &str) -> Result<()> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    let listing_id = usecases::delete_review(db, &caller, review_id)?;
    if let Err(err) = usecases::refresh_listing_rating(db, listing_id.as_str()) {
        log::error!(
            "Failed to refresh rating of listing {} after review deletion: {}",
            listing_id,
            err
        );
    }
    Ok(())
}

/// Public read, no token required.
pub fn listing_reviews<D: Db>(db: &D, listing_id: &str) -> Result<Vec<Review>> {
    Ok(usecases::load_reviews_of_listing(db, listing_id)?)
}
