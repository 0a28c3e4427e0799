use crate::repositories::*;

/// The complete document store a backend runs against.
pub trait Db: UserRepo + ListingRepo + BookingRepo + ReviewRepo + AccessTokenRepo {}
