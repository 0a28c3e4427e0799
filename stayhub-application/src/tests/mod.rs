mod host_workflow;

pub mod prelude {

    pub use stayhub_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use stayhub_db_memory::MemoryDb;

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub use stayhub_entities::builders::*;

    pub const DEFAULT_PASSWORD: &str = "secret1";

    pub fn unwrap_parameter_error(err: AppError) -> usecases::Error {
        match err {
            AppError::Business(BError::Parameter(err)) => err,
            err => panic!("unexpected error: {err:?}"),
        }
    }

    pub struct BackendFixture {
        pub db: MemoryDb,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                db: MemoryDb::default(),
            }
        }

        /// Registers a user through the regular flow and returns its id.
        pub fn register_user(&self, username: &str, email: &str, phone: &str) -> Id {
            let new_user = usecases::NewUser {
                username: username.into(),
                email: email.parse().unwrap(),
                phone: phone.into(),
                password: DEFAULT_PASSWORD.into(),
            };
            flows::register(&self.db, new_user).unwrap().id
        }

        /// Registers a user and immediately raises its role by a direct
        /// store write, bypassing the application workflow.
        pub fn register_user_with_role(
            &self,
            username: &str,
            email: &str,
            phone: &str,
            role: Role,
        ) -> Id {
            let id = self.register_user(username, email, phone);
            let mut user = self.db.get_user(id.as_str()).unwrap();
            user.role = role;
            self.db.update_user(&user).unwrap();
            id
        }

        pub fn login(&self, email: &str) -> String {
            let email = email.parse().unwrap();
            let credentials = usecases::Credentials {
                email: &email,
                password: DEFAULT_PASSWORD,
            };
            let (token, _) = flows::login(&self.db, &credentials).unwrap();
            token
        }

        /// Puts a host application into the given state by a direct store
        /// write. This is the only way a `pending` application can exist.
        pub fn set_application_status(&self, user_id: &str, status: ApplicationStatus) {
            let mut user = self.db.get_user(user_id).unwrap();
            user.host_application = HostApplication {
                status,
                submitted_at: Some(Timestamp::now()),
                info: Some(HostInfo::default()),
            };
            self.db.update_user(&user).unwrap();
        }

        pub fn seed_listing(&self, id: &str, host_id: &str) {
            self.db
                .create_listing(&Listing::build().id(id).host_id(host_id).title("Cabin").finish())
                .unwrap();
        }

        pub fn seed_booking(&self, user_id: &str, listing_id: &str, status: BookingStatus) {
            self.db
                .create_booking(
                    &Booking::build()
                        .user_id(user_id)
                        .listing_id(listing_id)
                        .status(status)
                        .finish(),
                )
                .unwrap();
        }

        pub fn listing_rating(&self, listing_id: &str) -> Option<f64> {
            self.db
                .get_listing(listing_id)
                .unwrap()
                .rating
                .map(Into::into)
        }
    }
}
