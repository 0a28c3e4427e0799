use super::{authorize::require_owner_or_admin, prelude::*};

pub fn get_booking<R>(repo: &R, caller: &User, booking_id: &str) -> Result<Booking>
where
    R: BookingRepo,
{
    let booking = repo.get_booking(booking_id)?;
    require_owner_or_admin(caller, &booking.user_id)?;
    Ok(booking)
}
