use super::*;

pub fn dashboard_stats<D: Db>(db: &D, token: &str) -> Result<usecases::DashboardStats> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::dashboard_stats(db, &caller)?)
}

pub fn list_users<D: Db>(db: &D, token: &str) -> Result<Vec<User>> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::list_users(db, &caller)?)
}
