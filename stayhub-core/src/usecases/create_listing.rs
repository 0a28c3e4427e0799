use super::{authorize::require_role, normalize_amenities, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub address: Address,
    pub price_per_night: u64,
    pub beds: u8,
    pub baths: u8,
    pub guests: u16,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub kind: ListingKind,
}

pub fn create_listing<R>(repo: &R, host: &User, new_listing: NewListing) -> Result<Listing>
where
    R: ListingRepo,
{
    require_role(host, Role::Host)?;
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
    } = new_listing;
    if title.trim().is_empty() {
        return Err(Error::Title);
    }
    if beds == 0 || baths == 0 || guests == 0 {
        return Err(Error::Capacity);
    }
    let listing = Listing {
        id: Id::new(),
        host_id: host.id.clone(),
        title,
        description,
        address,
        price_per_night,
        beds,
        baths,
        guests,
        amenities: normalize_amenities(amenities.iter().map(String::as_str)),
        images,
        kind,
        rating: None,
        is_available: true,
        is_cancelable: true,
        featured: false,
        created_at: Timestamp::now(),
    };
    log::debug!("Host {} creates listing {}", host.id, listing.id);
    repo.create_listing(&listing)?;
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use stayhub_entities::builders::*;

    fn cabin() -> NewListing {
        NewListing {
            title: "Cabin".into(),
            price_per_night: 100,
            beds: 1,
            baths: 1,
            guests: 2,
            ..Default::default()
        }
    }

    #[test]
    fn host_creates_listing() {
        let db = MockDb::default();
        let host = User::build().id("h").role(Role::Host).finish();
        let listing = create_listing(&db, &host, cabin()).unwrap();
        assert_eq!(host.id, listing.host_id);
        assert_eq!(None, listing.rating);
        assert!(listing.is_available);
        assert!(!listing.featured);
        assert_eq!(1, db.count_listings().unwrap());
    }

    #[test]
    fn plain_user_is_rejected() {
        let db = MockDb::default();
        let user = User::build().id("u").finish();
        assert!(matches!(
            create_listing(&db, &user, cabin()),
            Err(Error::RoleRequired(Role::Host))
        ));
        assert_eq!(0, db.count_listings().unwrap());
    }

    #[test]
    fn admin_creates_listing() {
        let db = MockDb::default();
        let admin = User::build().id("a").role(Role::Admin).finish();
        assert!(create_listing(&db, &admin, cabin()).is_ok());
    }

    #[test]
    fn reject_empty_title() {
        let db = MockDb::default();
        let host = User::build().id("h").role(Role::Host).finish();
        let mut listing = cabin();
        listing.title = "  ".into();
        assert!(matches!(
            create_listing(&db, &host, listing),
            Err(Error::Title)
        ));
    }

    #[test]
    fn reject_zero_capacity() {
        let db = MockDb::default();
        let host = User::build().id("h").role(Role::Host).finish();
        let mut listing = cabin();
        listing.guests = 0;
        assert!(matches!(
            create_listing(&db, &host, listing),
            Err(Error::Capacity)
        ));
    }

    #[test]
    fn amenities_are_normalized() {
        let db = MockDb::default();
        let host = User::build().id("h").role(Role::Host).finish();
        let mut new_listing = cabin();
        new_listing.amenities = vec!["WiFi".into(), " pool ".into(), "wifi".into()];
        let listing = create_listing(&db, &host, new_listing).unwrap();
        assert_eq!(vec!["pool".to_string(), "wifi".to_string()], listing.amenities);
    }
}
