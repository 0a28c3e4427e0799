use crate::{id::Id, rating::RatingValue, time::Timestamp};

/// A rated comment a user leaves on a listing.
///
/// The author's username is captured at creation time so reviews keep
/// displaying a name even after profile changes.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub listing_id : Id,
    pub user_id    : Id,
    pub username   : String,
    pub rating     : RatingValue,
    pub comment    : String,
    pub created_at : Timestamp,
}
