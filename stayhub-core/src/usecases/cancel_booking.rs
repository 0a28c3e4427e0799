use super::{authorize::require_owner_or_admin, prelude::*};

/// The only status transition available to the booking owner.
pub fn cancel_booking<R>(repo: &R, caller: &User, booking_id: &str) -> Result<Booking>
where
    R: BookingRepo,
{
    let mut booking = repo.get_booking(booking_id)?;
    require_owner_or_admin(caller, &booking.user_id)?;
    booking.status = BookingStatus::Cancelled;
    repo.update_booking(&booking)?;
    log::info!("Booking {} has been cancelled", booking.id);
    Ok(booking)
}
