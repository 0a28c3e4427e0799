use super::prelude::*;
use itertools::Itertools;

/// The caller's own bookings, most recent first.
pub fn user_bookings<R>(repo: &R, caller: &User) -> Result<Vec<Booking>>
where
    R: BookingRepo,
{
    Ok(repo
        .bookings_of_user(caller.id.as_str())?
        .into_iter()
        .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
        .collect())
}
