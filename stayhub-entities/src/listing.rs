use strum::{Display, EnumString};

use crate::{address::Address, id::Id, rating::AvgRating, time::Timestamp};

/// A rentable property, owned by a host.
///
/// The `rating` field is derived from the listing's reviews and is never
/// set independently; `None` means the listing has not been rated yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id              : Id,
    pub host_id         : Id,
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
    pub rating          : Option<AvgRating>,
    pub is_available    : bool,
    pub is_cancelable   : bool,
    pub featured        : bool,
    pub created_at      : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ListingKind {
    EntireHome,
    PrivateRoom,
    SharedRoom,
    Hotel,
    UniqueSpace,
}

impl Default for ListingKind {
    fn default() -> ListingKind {
        ListingKind::EntireHome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_listing_kind() {
        assert_eq!(ListingKind::EntireHome, "entire_home".parse().unwrap());
        assert_eq!(ListingKind::UniqueSpace, "Unique_Space".parse().unwrap());
        assert!("castle".parse::<ListingKind>().is_err());
        assert_eq!("private_room", ListingKind::PrivateRoom.to_string());
    }
}
