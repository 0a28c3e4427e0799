use super::*;
use stayhub_core::usecases;
use stayhub_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid e-mail address")]
    Email,
    #[error("Invalid calendar date")]
    Date,
}

impl From<e::user::Role> for Role {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            User => Role::User,
            Host => Role::Host,
            Admin => Role::Admin,
        }
    }
}

impl From<Role> for e::user::Role {
    fn from(from: Role) -> Self {
        use e::user::Role::*;
        match from {
            Role::User => User,
            Role::Host => Host,
            Role::Admin => Admin,
        }
    }
}

impl From<e::user::ApplicationStatus> for ApplicationStatus {
    fn from(from: e::user::ApplicationStatus) -> Self {
        use e::user::ApplicationStatus::*;
        match from {
            None => ApplicationStatus::None,
            Pending => ApplicationStatus::Pending,
            Approved => ApplicationStatus::Approved,
            Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationStatus> for e::user::ApplicationStatus {
    fn from(from: ApplicationStatus) -> Self {
        use e::user::ApplicationStatus::*;
        match from {
            ApplicationStatus::None => None,
            ApplicationStatus::Pending => Pending,
            ApplicationStatus::Approved => Approved,
            ApplicationStatus::Rejected => Rejected,
        }
    }
}

impl From<ApplicationDecision> for e::user::ApplicationDecision {
    fn from(from: ApplicationDecision) -> Self {
        use e::user::ApplicationDecision::*;
        match from {
            ApplicationDecision::Approved => Approved,
            ApplicationDecision::Rejected => Rejected,
        }
    }
}

impl From<e::listing::ListingKind> for ListingKind {
    fn from(from: e::listing::ListingKind) -> Self {
        use e::listing::ListingKind::*;
        match from {
            EntireHome => ListingKind::EntireHome,
            PrivateRoom => ListingKind::PrivateRoom,
            SharedRoom => ListingKind::SharedRoom,
            Hotel => ListingKind::Hotel,
            UniqueSpace => ListingKind::UniqueSpace,
        }
    }
}

impl From<ListingKind> for e::listing::ListingKind {
    fn from(from: ListingKind) -> Self {
        use e::listing::ListingKind::*;
        match from {
            ListingKind::EntireHome => EntireHome,
            ListingKind::PrivateRoom => PrivateRoom,
            ListingKind::SharedRoom => SharedRoom,
            ListingKind::Hotel => Hotel,
            ListingKind::UniqueSpace => UniqueSpace,
        }
    }
}

impl From<e::booking::BookingStatus> for BookingStatus {
    fn from(from: e::booking::BookingStatus) -> Self {
        use e::booking::BookingStatus::*;
        match from {
            Pending => BookingStatus::Pending,
            Confirmed => BookingStatus::Confirmed,
            Cancelled => BookingStatus::Cancelled,
            Completed => BookingStatus::Completed,
        }
    }
}

impl From<BookingStatus> for e::booking::BookingStatus {
    fn from(from: BookingStatus) -> Self {
        use e::booking::BookingStatus::*;
        match from {
            BookingStatus::Pending => Pending,
            BookingStatus::Confirmed => Confirmed,
            BookingStatus::Cancelled => Cancelled,
            BookingStatus::Completed => Completed,
        }
    }
}

impl From<e::booking::PaymentStatus> for PaymentStatus {
    fn from(from: e::booking::PaymentStatus) -> Self {
        use e::booking::PaymentStatus::*;
        match from {
            Pending => PaymentStatus::Pending,
            Paid => PaymentStatus::Paid,
            Refunded => PaymentStatus::Refunded,
            Failed => PaymentStatus::Failed,
        }
    }
}

impl From<PaymentStatus> for e::booking::PaymentStatus {
    fn from(from: PaymentStatus) -> Self {
        use e::booking::PaymentStatus::*;
        match from {
            PaymentStatus::Pending => Pending,
            PaymentStatus::Paid => Paid,
            PaymentStatus::Refunded => Refunded,
            PaymentStatus::Failed => Failed,
        }
    }
}

impl From<e::user::HostInfo> for HostInfo {
    fn from(from: e::user::HostInfo) -> Self {
        let e::user::HostInfo {
            about,
            location,
            experience,
        } = from;
        Self {
            about,
            location,
            experience,
        }
    }
}

impl From<HostInfo> for e::user::HostInfo {
    fn from(from: HostInfo) -> Self {
        let HostInfo {
            about,
            location,
            experience,
        } = from;
        Self {
            about,
            location,
            experience,
        }
    }
}

impl From<e::user::HostApplication> for HostApplication {
    fn from(from: e::user::HostApplication) -> Self {
        let e::user::HostApplication {
            status,
            submitted_at,
            info,
        } = from;
        Self {
            status: status.into(),
            submitted_at: submitted_at.map(e::time::Timestamp::into_unix_seconds),
            info: info.map(Into::into),
        }
    }
}

impl From<HostApplication> for e::user::HostApplication {
    fn from(from: HostApplication) -> Self {
        let HostApplication {
            status,
            submitted_at,
            info,
        } = from;
        Self {
            status: status.into(),
            submitted_at: submitted_at.map(e::time::Timestamp::from_unix_seconds),
            info: info.map(Into::into),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            email,
            phone,
            password: _password,
            role,
            host_application,
            created_at,
        } = from;
        Self {
            id: id.into(),
            username,
            email: email.into_string(),
            phone,
            role: role.into(),
            host_application: host_application.into(),
            created_at: created_at.into_unix_seconds(),
        }
    }
}

impl From<e::user::User> for UserRecord {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            email,
            phone,
            password,
            role,
            host_application,
            created_at,
        } = from;
        Self {
            id: id.into(),
            username,
            email: email.into_string(),
            phone,
            password_hash: password.as_hash().to_owned(),
            role: role.into(),
            host_application: host_application.into(),
            created_at: created_at.into_unix_seconds(),
        }
    }
}

impl From<UserRecord> for e::user::User {
    fn from(from: UserRecord) -> Self {
        let UserRecord {
            id,
            username,
            email,
            phone,
            password_hash,
            role,
            host_application,
            created_at,
        } = from;
        Self {
            id: id.into(),
            username,
            email: e::email::EmailAddress::new_unchecked(email),
            phone,
            password: e::password::Password::from_hash(password_hash),
            role: role.into(),
            host_application: host_application.into(),
            created_at: e::time::Timestamp::from_unix_seconds(created_at),
        }
    }
}

impl From<usecases::HostStatus> for HostStatus {
    fn from(from: usecases::HostStatus) -> Self {
        let usecases::HostStatus {
            status,
            submitted_at,
            role,
            info,
        } = from;
        Self {
            status: status.into(),
            submitted_at: submitted_at.map(e::time::Timestamp::into_unix_seconds),
            role: role.into(),
            info: info.map(Into::into),
        }
    }
}

impl From<usecases::HostApplicationEntry> for HostApplicationEntry {
    fn from(from: usecases::HostApplicationEntry) -> Self {
        let usecases::HostApplicationEntry {
            user_id,
            username,
            email,
            role,
            info,
            status,
            submitted_at,
        } = from;
        Self {
            user_id: user_id.into(),
            username,
            email: email.into_string(),
            role: role.into(),
            info: info.map(Into::into),
            status: status.into(),
            submitted_at: submitted_at.map(e::time::Timestamp::into_unix_seconds),
        }
    }
}

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            street,
            city,
            state,
            country,
        } = from;
        Self {
            street,
            city,
            state,
            country,
        }
    }
}

impl From<Address> for e::address::Address {
    fn from(from: Address) -> Self {
        let Address {
            street,
            city,
            state,
            country,
        } = from;
        Self {
            street,
            city,
            state,
            country,
        }
    }
}

impl From<e::listing::Listing> for Listing {
    fn from(from: e::listing::Listing) -> Self {
        let e::listing::Listing {
            id,
            host_id,
            title,
            description,
            address,
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind,
            rating,
            is_available,
            is_cancelable,
            featured,
            created_at,
        } = from;
        Self {
            id: id.into(),
            host_id: host_id.into(),
            title,
            description,
            address: address.into(),
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind: kind.into(),
            rating: rating.map(Into::into),
            is_available,
            is_cancelable,
            featured,
            created_at: created_at.into_unix_seconds(),
        }
    }
}

impl From<Listing> for e::listing::Listing {
    fn from(from: Listing) -> Self {
        let Listing {
            id,
            host_id,
            title,
            description,
            address,
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind,
            rating,
            is_available,
            is_cancelable,
            featured,
            created_at,
        } = from;
        Self {
            id: id.into(),
            host_id: host_id.into(),
            title,
            description,
            address: address.into(),
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind: kind.into(),
            rating: rating.map(Into::into),
            is_available,
            is_cancelable,
            featured,
            created_at: e::time::Timestamp::from_unix_seconds(created_at),
        }
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
            id,
            user_id,
            listing_id,
            check_in,
            check_out,
            guests,
            total_price,
            status,
            payment_status,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            listing_id: listing_id.into(),
            check_in: e::time::format_date(check_in),
            check_out: e::time::format_date(check_out),
            guests,
            total_price,
            status: status.into(),
            payment_status: payment_status.into(),
            created_at: created_at.into_unix_seconds(),
        }
    }
}

impl TryFrom<Booking> for e::booking::Booking {
    type Error = ConversionError;
    fn try_from(from: Booking) -> Result<Self, Self::Error> {
        let Booking {
            id,
            user_id,
            listing_id,
            check_in,
            check_out,
            guests,
            total_price,
            status,
            payment_status,
            created_at,
        } = from;
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            listing_id: listing_id.into(),
            check_in: e::time::parse_date(&check_in).map_err(|_| ConversionError::Date)?,
            check_out: e::time::parse_date(&check_out).map_err(|_| ConversionError::Date)?,
            guests,
            total_price,
            status: status.into(),
            payment_status: payment_status.into(),
            created_at: e::time::Timestamp::from_unix_seconds(created_at),
        })
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            listing_id,
            user_id,
            username,
            rating,
            comment,
            created_at,
        } = from;
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            user_id: user_id.into(),
            username,
            rating: rating.into(),
            comment,
            created_at: created_at.into_unix_seconds(),
        }
    }
}

impl From<Review> for e::review::Review {
    fn from(from: Review) -> Self {
        let Review {
            id,
            listing_id,
            user_id,
            username,
            rating,
            comment,
            created_at,
        } = from;
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            user_id: user_id.into(),
            username,
            rating: rating.into(),
            comment,
            created_at: e::time::Timestamp::from_unix_seconds(created_at),
        }
    }
}

impl TryFrom<NewUser> for usecases::NewUser {
    type Error = ConversionError;
    fn try_from(from: NewUser) -> Result<Self, Self::Error> {
        let NewUser {
            username,
            email,
            phone,
            password,
        } = from;
        Ok(Self {
            username,
            email: email.parse().map_err(|_| ConversionError::Email)?,
            phone,
            password,
        })
    }
}

impl From<NewHostApplication> for usecases::NewHostApplication {
    fn from(from: NewHostApplication) -> Self {
        let NewHostApplication {
            about,
            location,
            experience,
        } = from;
        Self {
            about,
            location,
            experience,
        }
    }
}

impl From<NewListing> for usecases::NewListing {
    fn from(from: NewListing) -> Self {
        let NewListing {
            title,
            description,
            address,
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind,
        } = from;
        Self {
            title,
            description,
            address: address.into(),
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind: kind.map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<ListingUpdate> for usecases::ListingUpdate {
    fn from(from: ListingUpdate) -> Self {
        let ListingUpdate {
            title,
            description,
            address,
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind,
            is_available,
            is_cancelable,
        } = from;
        Self {
            title,
            description,
            address: address.map(Into::into),
            price_per_night,
            beds,
            baths,
            guests,
            amenities,
            images,
            kind: kind.map(Into::into),
            is_available,
            is_cancelable,
        }
    }
}

impl TryFrom<NewBooking> for usecases::NewBooking {
    type Error = ConversionError;
    fn try_from(from: NewBooking) -> Result<Self, Self::Error> {
        let NewBooking {
            listing_id,
            check_in,
            check_out,
            guests,
            total_price,
        } = from;
        Ok(Self {
            listing_id: listing_id.into(),
            check_in: e::time::parse_date(&check_in).map_err(|_| ConversionError::Date)?,
            check_out: e::time::parse_date(&check_out).map_err(|_| ConversionError::Date)?,
            guests,
            total_price,
        })
    }
}

impl TryFrom<BookingUpdate> for usecases::BookingUpdate {
    type Error = ConversionError;
    fn try_from(from: BookingUpdate) -> Result<Self, Self::Error> {
        let BookingUpdate {
            check_in,
            check_out,
            guests,
            status,
        } = from;
        Ok(Self {
            check_in: check_in
                .map(|d| e::time::parse_date(&d).map_err(|_| ConversionError::Date))
                .transpose()?,
            check_out: check_out
                .map(|d| e::time::parse_date(&d).map_err(|_| ConversionError::Date))
                .transpose()?,
            guests,
            status: status.map(Into::into),
        })
    }
}

impl From<NewReview> for usecases::NewReview {
    fn from(from: NewReview) -> Self {
        let NewReview {
            listing_id,
            rating,
            comment,
        } = from;
        Self {
            listing_id: listing_id.into(),
            rating: rating.into(),
            comment,
        }
    }
}

impl From<ReviewUpdate> for usecases::ReviewUpdate {
    fn from(from: ReviewUpdate) -> Self {
        let ReviewUpdate { rating, comment } = from;
        Self {
            rating: rating.map(Into::into),
            comment,
        }
    }
}

impl TryFrom<ProfileUpdate> for usecases::ProfileUpdate {
    type Error = ConversionError;
    fn try_from(from: ProfileUpdate) -> Result<Self, Self::Error> {
        let ProfileUpdate {
            username,
            email,
            phone,
        } = from;
        Ok(Self {
            username,
            email: email
                .map(|e| e.parse().map_err(|_| ConversionError::Email))
                .transpose()?,
            phone,
        })
    }
}

impl From<usecases::DashboardStats> for DashboardStats {
    fn from(from: usecases::DashboardStats) -> Self {
        let usecases::DashboardStats {
            user_count,
            listing_count,
            booking_count,
            review_count,
        } = from;
        Self {
            user_count,
            listing_count,
            booking_count,
            review_count,
        }
    }
}

/// Maps a usecase failure onto the public error kind of the operation
/// surface. Infrastructure failures (io etc.) have no public kind and
/// yield `None`.
pub fn error_kind(err: &usecases::Error) -> Option<ErrorKind> {
    use stayhub_core::repositories::Error as RepoError;
    use usecases::Error::*;
    Some(match err {
        Title | Username | EmailAddress | PhoneNumber | Password | Decision(_) | Capacity
        | EndDateBeforeStart | GuestCount | RatingValue | EmptyComment => ErrorKind::InvalidInput,
        UserDoesNotExist => ErrorKind::NotFound,
        Credentials | TokenInvalid | TokenExpired | Unauthorized => ErrorKind::Unauthorized,
        Forbidden | RoleRequired(_) | NotEligibleToReview => ErrorKind::Forbidden,
        UserExists | PhoneNumberExists | ReviewExists => ErrorKind::Conflict,
        AlreadyHost => ErrorKind::AlreadyHost,
        NoPendingApplication => ErrorKind::NoPendingApplication,
        Repo(RepoError::NotFound) => ErrorKind::NotFound,
        Repo(RepoError::AlreadyExists) => ErrorKind::Conflict,
        Repo(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_usecase_errors_to_kinds() {
        assert_eq!(
            Some(ErrorKind::AlreadyHost),
            error_kind(&usecases::Error::AlreadyHost)
        );
        assert_eq!(
            Some(ErrorKind::Forbidden),
            error_kind(&usecases::Error::NotEligibleToReview)
        );
        assert_eq!(
            Some(ErrorKind::Conflict),
            error_kind(&usecases::Error::ReviewExists)
        );
        assert_eq!(
            Some(ErrorKind::NotFound),
            error_kind(&usecases::Error::Repo(
                stayhub_core::repositories::Error::NotFound
            ))
        );
        assert_eq!(
            None,
            error_kind(&usecases::Error::Repo(
                stayhub_core::repositories::Error::Other(anyhow::anyhow!("boom"))
            ))
        );
    }

    #[test]
    fn booking_date_round_trip() {
        let booking = Booking {
            id: "b".into(),
            user_id: "u".into(),
            listing_id: "l".into(),
            check_in: "2024-07-01".into(),
            check_out: "2024-07-05".into(),
            guests: 2,
            total_price: 400,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            created_at: 0,
        };
        let entity = e::booking::Booking::try_from(booking.clone()).unwrap();
        assert_eq!(booking, Booking::from(entity));
    }

    #[test]
    fn reject_invalid_booking_dates() {
        let booking = Booking {
            id: "b".into(),
            user_id: "u".into(),
            listing_id: "l".into(),
            check_in: "01.07.2024".into(),
            check_out: "2024-07-05".into(),
            guests: 2,
            total_price: 400,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            created_at: 0,
        };
        assert!(e::booking::Booking::try_from(booking).is_err());
    }
}
