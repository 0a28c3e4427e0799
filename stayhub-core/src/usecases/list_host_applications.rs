use super::{authorize::require_role, prelude::*};

/// Projection of a user that has applied for the host role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostApplicationEntry {
    pub user_id: Id,
    pub username: String,
    pub email: EmailAddress,
    pub role: Role,
    pub info: Option<HostInfo>,
    pub status: ApplicationStatus,
    pub submitted_at: Option<Timestamp>,
}

impl From<User> for HostApplicationEntry {
    fn from(from: User) -> Self {
        let User {
            id,
            username,
            email,
            role,
            host_application,
            ..
        } = from;
        Self {
            user_id: id,
            username,
            email,
            role,
            info: host_application.info,
            status: host_application.status,
            submitted_at: host_application.submitted_at,
        }
    }
}

/// Every user that has ever applied, regardless of the outcome.
pub fn list_host_applications<R>(repo: &R, admin: &User) -> Result<Vec<HostApplicationEntry>>
where
    R: UserRepo,
{
    require_role(admin, Role::Admin)?;
    Ok(repo
        .all_users()?
        .into_iter()
        .filter(User::has_applied)
        .map(Into::into)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use stayhub_entities::builders::*;

    #[test]
    fn only_applicants_are_listed() {
        let db = MockDb::default();
        let admin = User::build().id("a").role(Role::Admin).finish();
        let fresh = User::build().id("u1").finish();
        let rejected = User::build()
            .id("u2")
            .host_application(HostApplication {
                status: ApplicationStatus::Rejected,
                submitted_at: Some(Timestamp::now()),
                info: None,
            })
            .finish();
        db.create_user(&admin).unwrap();
        db.create_user(&fresh).unwrap();
        db.create_user(&rejected).unwrap();

        let applications = list_host_applications(&db, &admin).unwrap();
        assert_eq!(1, applications.len());
        assert_eq!(Id::from("u2"), applications[0].user_id);
        assert_eq!(ApplicationStatus::Rejected, applications[0].status);
    }

    #[test]
    fn admin_only() {
        let db = MockDb::default();
        let user = User::build().id("u").finish();
        db.create_user(&user).unwrap();
        assert!(list_host_applications(&db, &user).is_err());
    }
}
