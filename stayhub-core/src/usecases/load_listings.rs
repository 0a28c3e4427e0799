use super::{authorize::require_role, prelude::*};

/// Public browse over all listings, no authentication required.
pub fn load_listings<R>(repo: &R) -> Result<Vec<Listing>>
where
    R: ListingRepo,
{
    Ok(repo.all_listings()?)
}

/// Public single-listing read.
pub fn get_listing<R>(repo: &R, listing_id: &str) -> Result<Listing>
where
    R: ListingRepo,
{
    Ok(repo.get_listing(listing_id)?)
}

/// The listings owned by the calling host.
pub fn host_listings<R>(repo: &R, host: &User) -> Result<Vec<Listing>>
where
    R: ListingRepo,
{
    require_role(host, Role::Host)?;
    Ok(repo.listings_of_host(host.id.as_str())?)
}
