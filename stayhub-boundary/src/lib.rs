//! # stayhub-boundary
//!
//! Serializable, anemic data structures for accessing the stayhub API in
//! a type-safe manner. Field and enum spellings define the wire format.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
pub mod conv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Host,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    None,
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    EntireHome,
    PrivateRoom,
    SharedRoom,
    Hotel,
    UniqueSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub about: String,
    pub location: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostApplication {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<HostInfo>,
}

/// Public view of a user account; the password never crosses the boundary.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id               : String,
    pub username         : String,
    pub email            : String,
    pub phone            : String,
    pub role             : Role,
    pub host_application : HostApplication,
    pub created_at       : i64,
}

/// Full user record as stored in snapshots, including the password hash.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id               : String,
    pub username         : String,
    pub email            : String,
    pub phone            : String,
    pub password_hash    : String,
    pub role             : Role,
    pub host_application : HostApplication,
    pub created_at       : i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostStatus {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<i64>,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<HostInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostApplicationEntry {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<HostInfo>,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<i64>,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id              : String,
    pub host_id         : String,
    pub title           : String,
    pub description     : String,
    pub address         : Address,
    pub price_per_night : u64,
    pub beds            : u8,
    pub baths           : u8,
    pub guests          : u16,
    pub amenities       : Vec<String>,
    pub images          : Vec<String>,
    pub kind            : ListingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating          : Option<f64>,
    pub is_available    : bool,
    pub is_cancelable   : bool,
    pub featured        : bool,
    pub created_at      : i64,
}

/// Calendar dates on the wire use `YYYY-MM-DD` notation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id             : String,
    pub user_id        : String,
    pub listing_id     : String,
    pub check_in       : String,
    pub check_out      : String,
    pub guests         : u16,
    pub total_price    : u64,
    pub status         : BookingStatus,
    pub payment_status : PaymentStatus,
    pub created_at     : i64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id         : String,
    pub listing_id : String,
    pub user_id    : String,
    pub username   : String,
    pub rating     : u8,
    pub comment    : String,
    pub created_at : i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHostApplication {
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Address,
    pub price_per_night: u64,
    pub beds: u8,
    pub baths: u8,
    pub guests: u16,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub kind: Option<ListingKind>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ListingKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cancelable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub listing_id: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u16,
    pub total_price: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub listing_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub user_count: usize,
    pub listing_count: usize,
    pub booking_count: usize,
    pub review_count: usize,
}

/// A whole-store serialization, as written and read by the CLI.
/// Access tokens are sessions and are not part of a snapshot.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// The error kinds of the operation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Forbidden,
    Unauthorized,
    Conflict,
    AlreadyHost,
    NoPendingApplication,
}

/// The tagged result envelope every operation responds with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response<T> {
    Ok {
        ok: bool,
        data: T,
    },
    Err {
        ok: bool,
        #[serde(rename = "errorKind")]
        error_kind: ErrorKind,
        message: String,
    },
}

impl<T> Response<T> {
    pub fn ok(data: T) -> Self {
        Self::Ok { ok: true, data }
    }

    pub fn err(error_kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Err {
            ok: false,
            error_kind,
            message: message.into(),
        }
    }
}
