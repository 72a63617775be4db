//! Data model shared by the store and the HTTP layer.

pub mod user;

pub use user::{CreateUserRequest, CreatedUser, User, UserId};
