use super::{authorize::require_role, prelude::*};

/// Toggles the admin-owned `featured` flag of a listing.
pub fn set_listing_featured<R>(
    repo: &R,
    admin: &User,
    listing_id: &str,
    featured: bool,
) -> Result<Listing>
where
    R: ListingRepo,
{
    require_role(admin, Role::Admin)?;
    let mut listing = repo.get_listing(listing_id)?;
    listing.featured = featured;
    repo.update_listing(&listing)?;
    Ok(listing)
}
