use crate::entities::{AvgRating, AvgRatingBuilder, Listing, Review};

pub trait Rated {
    /// The mean of the given review scores, rounded to one decimal,
    /// or `None` if there are no reviews.
    fn avg_rating(&self, _: &[Review]) -> Option<AvgRating>;
}

impl Rated for Listing {
    fn avg_rating(&self, reviews: &[Review]) -> Option<AvgRating> {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.listing_id == self.id).count()
        );
        reviews
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, r| {
                acc += r.rating;
                acc
            })
            .build()
    }
}
