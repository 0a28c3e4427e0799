use super::*;

pub fn create_booking<D: Db>(
    db: &D,
    token: &str,
    new_booking: usecases::NewBooking,
) -> Result<Booking> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::create_booking(db, &caller, new_booking)?)
}

pub fn get_booking<D: Db>(db: &D, token: &str, booking_id: &str) -> Result<Booking> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::get_booking(db, &caller, booking_id)?)
}

pub fn update_booking<D: Db>(
    db: &D,
    token: &str,
    booking_id: &str,
    update: usecases::BookingUpdate,
) -> Result<Booking> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::update_booking(db, &caller, booking_id, update)?)
}

pub fn cancel_booking<D: Db>(db: &D, token: &str, booking_id: &str) -> Result<Booking> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::cancel_booking(db, &caller, booking_id)?)
}

pub fn user_bookings<D: Db>(db: &D, token: &str) -> Result<Vec<Booking>> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::user_bookings(db, &caller)?)
}
