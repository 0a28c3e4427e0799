use strum::{Display, EnumString};

use crate::{
    id::Id,
    time::{Date, Timestamp},
};

/// A reservation linking a user and a listing over a date range.
///
/// Check-out is strictly after check-in. Overlapping reservations for the
/// same listing are not prevented by the data model.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id             : Id,
    pub user_id        : Id,
    pub listing_id     : Id,
    pub check_in       : Date,
    pub check_out      : Date,
    pub guests         : u16,
    pub total_price    : u64,
    pub status         : BookingStatus,
    pub payment_status : PaymentStatus,
    pub created_at     : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Default for BookingStatus {
    fn default() -> BookingStatus {
        BookingStatus::Pending
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl Default for PaymentStatus {
    fn default() -> PaymentStatus {
        PaymentStatus::Pending
    }
}
