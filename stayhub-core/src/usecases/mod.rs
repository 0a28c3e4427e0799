mod access_tokens;
mod apply_host;
mod authorize;
mod cancel_booking;
mod create_booking;
mod create_listing;
mod create_review;
mod dashboard;
mod delete_listing;
mod delete_review;
mod delete_user;
mod error;
mod feature_listing;
mod get_booking;
mod get_user;
mod host_status;
mod list_host_applications;
mod list_users;
mod load_listings;
mod load_reviews;
mod login;
mod process_host_application;
mod refresh_listing_rating;
mod register;
mod update_booking;
mod update_listing;
mod update_profile;
mod update_review;
mod user_bookings;

#[cfg(test)]
pub mod tests;

pub use self::{
    access_tokens::*, apply_host::*, authorize::*, cancel_booking::*, create_booking::*,
    create_listing::*, create_review::*, dashboard::*, delete_listing::*, delete_review::*,
    delete_user::*, error::Error, feature_listing::*, get_booking::*, get_user::*,
    host_status::*, list_host_applications::*, list_users::*, load_listings::*, load_reviews::*,
    login::*, process_host_application::*, refresh_listing_rating::*, register::*,
    update_booking::*, update_listing::*, update_profile::*, update_review::*, user_bookings::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}

/// Trims, lowercases, sorts and deduplicates a caller-supplied amenity list.
pub fn normalize_amenities<'a>(amenities: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut amenities: Vec<_> = amenities
        .into_iter()
        .filter_map(|a| match a.trim() {
            a if a.is_empty() => None,
            a => Some(a.to_lowercase()),
        })
        .collect();
    amenities.sort_unstable();
    amenities.dedup();
    amenities
}
