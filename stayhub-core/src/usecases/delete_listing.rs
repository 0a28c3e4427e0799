use super::{authorize::require_owner_or_admin, prelude::*};

pub fn delete_listing<R>(repo: &R, caller: &User, listing_id: &str) -> Result<()>
where
    R: ListingRepo,
{
    let listing = repo.get_listing(listing_id)?;
    require_owner_or_admin(caller, &listing.host_id)?;
    log::info!("Deleting listing {}", listing_id);
    Ok(repo.delete_listing(listing_id)?)
}
