//! Data models for the rideshare demo

mod ride;
mod user;
mod vehicle;

pub use ride::*;
pub use user::*;
pub use vehicle::*;
