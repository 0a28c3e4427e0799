use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub listing_id: Id,
    pub check_in: Date,
    pub check_out: Date,
    pub guests: u16,
    pub total_price: u64,
}

/// Creates a reservation in one step: the booking starts out confirmed
/// and paid, payment is settled elsewhere. Overlapping date ranges for
/// the same listing are not checked.
pub fn create_booking<D>(db: &D, booker: &User, new_booking: NewBooking) -> Result<Booking>
where
    D: BookingRepo + ListingRepo,
{
    let NewBooking {
        listing_id,
        check_in,
        check_out,
        guests,
        total_price,
    } = new_booking;
    if check_out <= check_in {
        return Err(Error::EndDateBeforeStart);
    }
    if guests == 0 {
        return Err(Error::GuestCount);
    }
    let _ = db.get_listing(listing_id.as_str())?;
    let booking = Booking {
        id: Id::new(),
        user_id: booker.id.clone(),
        listing_id,
        check_in,
        check_out,
        guests,
        total_price,
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Paid,
        created_at: Timestamp::now(),
    };
    db.create_booking(&booking)?;
    Ok(booking)
}
