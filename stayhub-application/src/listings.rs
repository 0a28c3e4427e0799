use super::*;

pub fn create_listing<D: Db>(
    db: &D,
    token: &str,
    new_listing: usecases::NewListing,
) -> Result<Listing> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::create_listing(db, &caller, new_listing)?)
}

pub fn update_listing<D: Db>(
    db: &D,
    token: &str,
    listing_id: &str,
    update: usecases::ListingUpdate,
) -> Result<Listing> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::update_listing(db, &caller, listing_id, update)?)
}

pub fn delete_listing<D: Db>(db: &D, token: &str, listing_id: &str) -> Result<()> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::delete_listing(db, &caller, listing_id)?)
}

/// Public browse, no token required.
pub fn browse_listings<D: Db>(db: &D) -> Result<Vec<Listing>> {
    Ok(usecases::load_listings(db)?)
}

/// Public single-listing read, no token required.
pub fn get_listing<D: Db>(db: &D, listing_id: &str) -> Result<Listing> {
    Ok(usecases::get_listing(db, listing_id)?)
}

pub fn host_listings<D: Db>(db: &D, token: &str) -> Result<Vec<Listing>> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::host_listings(db, &caller)?)
}

pub fn set_listing_featured<D: Db>(
    db: &D,
    token: &str,
    listing_id: &str,
    featured: bool,
) -> Result<Listing> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::set_listing_featured(
        db, &caller, listing_id, featured,
    )?)
}
