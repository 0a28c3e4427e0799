use super::*;

pub fn apply_host<D: Db>(
    db: &D,
    token: &str,
    application: usecases::NewHostApplication,
) -> Result<usecases::HostStatus> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::apply_to_become_host(
        db,
        caller.id.as_str(),
        application,
    )?)
}

pub fn host_status<D: Db>(db: &D, token: &str) -> Result<usecases::HostStatus> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::host_application_status(db, caller.id.as_str())?)
}

pub fn process_host_application<D: Db>(
    db: &D,
    token: &str,
    target_user_id: &str,
    decision: ApplicationDecision,
) -> Result<User> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::process_host_application(
        db,
        &caller,
        target_user_id,
        decision,
    )?)
}

pub fn list_host_applications<D: Db>(
    db: &D,
    token: &str,
) -> Result<Vec<usecases::HostApplicationEntry>> {
    let caller = usecases::authenticate_token_holder(db, token)?;
    Ok(usecases::list_host_applications(db, &caller)?)
}
