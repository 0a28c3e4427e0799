use super::{authorize::require_owner_or_admin, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub guests: Option<u16>,
    pub status: Option<BookingStatus>,
}

pub fn update_booking<R>(
    repo: &R,
    caller: &User,
    booking_id: &str,
    update: BookingUpdate,
) -> Result<Booking>
where
    R: BookingRepo,
{
    let mut booking = repo.get_booking(booking_id)?;
    require_owner_or_admin(caller, &booking.user_id)?;
    if let Some(check_in) = update.check_in {
        booking.check_in = check_in;
    }
    if let Some(check_out) = update.check_out {
        booking.check_out = check_out;
    }
    if booking.check_out <= booking.check_in {
        return Err(Error::EndDateBeforeStart);
    }
    if let Some(guests) = update.guests {
        if guests == 0 {
            return Err(Error::GuestCount);
        }
        booking.guests = guests;
    }
    // A status sent by the owner is ignored, only admins may set it.
    if let Some(status) = update.status {
        if caller.role == Role::Admin {
            booking.status = status;
        }
    }
    repo.update_booking(&booking)?;
    Ok(booking)
}
