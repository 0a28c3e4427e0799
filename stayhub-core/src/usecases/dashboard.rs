use super::{authorize::require_role, prelude::*};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub user_count: usize,
    pub listing_count: usize,
    pub booking_count: usize,
    pub review_count: usize,
}

pub fn dashboard_stats<D: Db>(db: &D, admin: &User) -> Result<DashboardStats> {
    require_role(admin, Role::Admin)?;
    Ok(DashboardStats {
        user_count: db.count_users()?,
        listing_count: db.count_listings()?,
        booking_count: db.count_bookings()?,
        review_count: db.count_reviews()?,
    })
}
