//! Rideshare Core Library
//!
//! Session persistence, form validation, mock backend calls and view
//! rendering for the rideshare demo front-end.

pub mod account;
pub mod booking;
pub mod error;
pub mod mock;
pub mod models;
pub mod pending;
pub mod storage;
pub mod support;
pub mod validation;
pub mod view;

pub use account::{login, quick_login, sign_out, sign_up, update_display_name, DemoAccount};
pub use booking::{book_ride, RideRequest};
pub use error::{Error, Result};
pub use mock::{fetch_rides, fetch_vehicles};
pub use models::*;
pub use pending::{PendingGate, PendingGuard};
pub use storage::{BlobStore, Database, MemoryBlobStore, SessionStore, SharedSession};
pub use support::{request_password_reset, send_contact_message, ContactForm};
pub use validation::{is_valid_email, LoginForm, SignUpField, SignUpForm, ValidationError};
