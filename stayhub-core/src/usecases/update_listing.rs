use super::{authorize::require_owner_or_admin, normalize_amenities, prelude::*};

/// Partial update of a listing. The derived rating and the admin-owned
/// `featured` flag cannot be written through this path.
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<Address>,
    pub price_per_night: Option<u64>,
    pub beds: Option<u8>,
    pub baths: Option<u8>,
    pub guests: Option<u16>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub kind: Option<ListingKind>,
    pub is_available: Option<bool>,
    pub is_cancelable: Option<bool>,
}

pub fn update_listing<R>(
    repo: &R,
    caller: &User,
    listing_id: &str,
    update: ListingUpdate,
) -> Result<Listing>
where
    R: ListingRepo,
{
    let mut listing = repo.get_listing(listing_id)?;
    require_owner_or_admin(caller, &listing.host_id)?;
    if let Some(title) = update.title {
        if title.trim().is_empty() {
            return Err(Error::Title);
        }
        listing.title = title;
    }
    if let Some(description) = update.description {
        listing.description = description;
    }
    if let Some(address) = update.address {
        listing.address = address;
    }
    if let Some(price_per_night) = update.price_per_night {
        listing.price_per_night = price_per_night;
    }
    if let Some(beds) = update.beds {
        listing.beds = beds;
    }
    if let Some(baths) = update.baths {
        listing.baths = baths;
    }
    if let Some(guests) = update.guests {
        listing.guests = guests;
    }
    if listing.beds == 0 || listing.baths == 0 || listing.guests == 0 {
        return Err(Error::Capacity);
    }
    if let Some(amenities) = update.amenities {
        listing.amenities = normalize_amenities(amenities.iter().map(String::as_str));
    }
    if let Some(images) = update.images {
        listing.images = images;
    }
    if let Some(kind) = update.kind {
        listing.kind = kind;
    }
    if let Some(is_available) = update.is_available {
        listing.is_available = is_available;
    }
    if let Some(is_cancelable) = update.is_cancelable {
        listing.is_cancelable = is_cancelable;
    }
    repo.update_listing(&listing)?;
    Ok(listing)
}
