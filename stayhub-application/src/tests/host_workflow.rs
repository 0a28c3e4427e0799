use super::prelude::*;

fn application() -> usecases::NewHostApplication {
    usecases::NewHostApplication {
        about: "x".into(),
        location: "Austin".into(),
        experience: "none".into(),
    }
}

#[test]
fn register_apply_and_create_listing() {
    let fixture = BackendFixture::new();
    fixture.register_user("u", "u@example.com", "111 111");
    let token = fixture.login("u@example.com");

    let status = flows::apply_host(&fixture.db, &token, application()).unwrap();
    assert_eq!(ApplicationStatus::Approved, status.status);
    assert_eq!(Role::Host, status.role);

    // The role change is effective on the next request with the same token.
    let listing = flows::create_listing(
        &fixture.db,
        &token,
        usecases::NewListing {
            title: "Cabin".into(),
            price_per_night: 100,
            beds: 1,
            baths: 1,
            guests: 2,
            ..Default::default()
        },
    )
    .unwrap();
    let user = flows::current_user(&fixture.db, &token).unwrap();
    assert_eq!(user.id, listing.host_id);
}

#[test]
fn applying_twice_fails_without_mutation() {
    let fixture = BackendFixture::new();
    let user_id = fixture.register_user("u", "u@example.com", "111 111");
    let token = fixture.login("u@example.com");

    flows::apply_host(&fixture.db, &token, application()).unwrap();
    let before = fixture.db.get_user(user_id.as_str()).unwrap();
    let err = flows::apply_host(&fixture.db, &token, application()).unwrap_err();
    assert!(matches!(
        unwrap_parameter_error(err),
        usecases::Error::AlreadyHost
    ));
    assert_eq!(before, fixture.db.get_user(user_id.as_str()).unwrap());
}

#[test]
fn processing_without_pending_application_fails() {
    let fixture = BackendFixture::new();
    let target_id = fixture.register_user("w", "w@example.com", "111 111");
    fixture.register_user_with_role("admin", "admin@example.com", "999 999", Role::Admin);
    let admin_token = fixture.login("admin@example.com");

    // W has never applied: hostApplicationStatus is still `none`.
    let err = flows::process_host_application(
        &fixture.db,
        &admin_token,
        target_id.as_str(),
        ApplicationDecision::Approved,
    )
    .unwrap_err();
    assert!(matches!(
        unwrap_parameter_error(err),
        usecases::Error::NoPendingApplication
    ));
}

#[test]
fn admin_approves_imported_pending_application() {
    let fixture = BackendFixture::new();
    let target_id = fixture.register_user("w", "w@example.com", "111 111");
    fixture.set_application_status(target_id.as_str(), ApplicationStatus::Pending);
    fixture.register_user_with_role("admin", "admin@example.com", "999 999", Role::Admin);
    let admin_token = fixture.login("admin@example.com");

    let processed = flows::process_host_application(
        &fixture.db,
        &admin_token,
        target_id.as_str(),
        ApplicationDecision::Approved,
    )
    .unwrap();
    assert_eq!(Role::Host, processed.role);

    // The freshly approved host can create listings right away.
    let host_token = fixture.login("w@example.com");
    assert!(flows::create_listing(
        &fixture.db,
        &host_token,
        usecases::NewListing {
            title: "Loft".into(),
            price_per_night: 80,
            beds: 1,
            baths: 1,
            guests: 2,
            ..Default::default()
        },
    )
    .is_ok());
}

#[test]
fn rejected_applicant_stays_plain_user() {
    let fixture = BackendFixture::new();
    let target_id = fixture.register_user("w", "w@example.com", "111 111");
    fixture.set_application_status(target_id.as_str(), ApplicationStatus::Pending);
    fixture.register_user_with_role("admin", "admin@example.com", "999 999", Role::Admin);
    let admin_token = fixture.login("admin@example.com");

    flows::process_host_application(
        &fixture.db,
        &admin_token,
        target_id.as_str(),
        ApplicationDecision::Rejected,
    )
    .unwrap();
    let user = fixture.db.get_user(target_id.as_str()).unwrap();
    assert_eq!(Role::User, user.role);
    assert_eq!(ApplicationStatus::Rejected, user.host_application.status);
}

#[test]
fn applications_listing_is_admin_only() {
    let fixture = BackendFixture::new();
    fixture.register_user("u", "u@example.com", "111 111");
    let token = fixture.login("u@example.com");
    flows::apply_host(&fixture.db, &token, application()).unwrap();

    fixture.register_user_with_role("admin", "admin@example.com", "999 999", Role::Admin);
    let admin_token = fixture.login("admin@example.com");
    let applications = flows::list_host_applications(&fixture.db, &admin_token).unwrap();
    assert_eq!(1, applications.len());
    assert_eq!("u", applications[0].username);

    // The applicant (now a host) may not list applications.
    assert!(flows::list_host_applications(&fixture.db, &token).is_err());
}

#[test]
fn host_status_reflects_the_store() {
    let fixture = BackendFixture::new();
    fixture.register_user("u", "u@example.com", "111 111");
    let token = fixture.login("u@example.com");

    let status = flows::host_status(&fixture.db, &token).unwrap();
    assert_eq!(ApplicationStatus::None, status.status);
    flows::apply_host(&fixture.db, &token, application()).unwrap();
    let status = flows::host_status(&fixture.db, &token).unwrap();
    assert_eq!(ApplicationStatus::Approved, status.status);
    assert_eq!(Role::Host, status.role);
}
