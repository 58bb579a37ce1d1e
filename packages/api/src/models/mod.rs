//! Data models exchanged with the users service.

mod user;

pub use user::{User, UserPatch, UserUpdate};
