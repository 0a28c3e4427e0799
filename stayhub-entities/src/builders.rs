pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, listing_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.user.phone = phone.into();
            self
        }
        pub fn password(mut self, plain: &str) -> Self {
            self.user.password = plain.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn host_application(mut self, host_application: HostApplication) -> Self {
            self.user.host_application = host_application;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    phone: "".into(),
                    password: Password::from_hash("".into()),
                    role: Role::User,
                    host_application: HostApplication::default(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod listing_builder {

    use super::*;
    use crate::{address::*, id::*, listing::*, time::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn host_id(mut self, host_id: &str) -> Self {
            self.listing.host_id = host_id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.listing.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.listing.description = desc.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.listing.address.city = Some(city.into());
            self
        }
        pub fn price_per_night(mut self, price: u64) -> Self {
            self.listing.price_per_night = price;
            self
        }
        pub fn guests(mut self, guests: u16) -> Self {
            self.listing.guests = guests;
            self
        }
        pub fn amenities(mut self, amenities: Vec<impl Into<String>>) -> Self {
            self.listing.amenities = amenities.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn rating(mut self, rating: Option<f64>) -> Self {
            self.listing.rating = rating.map(Into::into);
            self
        }
        pub fn featured(mut self, featured: bool) -> Self {
            self.listing.featured = featured;
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            ListingBuild {
                listing: Listing {
                    id: Id::new(),
                    host_id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    address: Address::default(),
                    price_per_night: 0,
                    beds: 1,
                    baths: 1,
                    guests: 1,
                    amenities: vec![],
                    images: vec![],
                    kind: ListingKind::default(),
                    rating: None,
                    is_available: true,
                    is_cancelable: true,
                    featured: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, time::*};
    use time::macros::date;

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.booking.user_id = user_id.into();
            self
        }
        pub fn listing_id(mut self, listing_id: &str) -> Self {
            self.booking.listing_id = listing_id.into();
            self
        }
        pub fn dates(mut self, check_in: Date, check_out: Date) -> Self {
            self.booking.check_in = check_in;
            self.booking.check_out = check_out;
            self
        }
        pub fn guests(mut self, guests: u16) -> Self {
            self.booking.guests = guests;
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
            self.booking.payment_status = payment_status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.booking.created_at = created_at;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    user_id: Id::new(),
                    listing_id: Id::new(),
                    check_in: date!(2024 - 06 - 01),
                    check_out: date!(2024 - 06 - 05),
                    guests: 1,
                    total_price: 0,
                    status: BookingStatus::Confirmed,
                    payment_status: PaymentStatus::Paid,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
