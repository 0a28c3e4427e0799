//! # stayhub-core
//!
//! Business rules of the stayhub platform: repository traits for the
//! document store, the usecase layer and the authorization gate.

pub mod authorization;
pub mod db;
pub mod rating;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use stayhub_entities::{
        address::*, booking::*, email::*, id::*, listing::*, nonce::*, password::*, rating::*,
        review::*, time::*, user::*,
    };
}
