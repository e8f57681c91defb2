//! Domain models shared by the HTTP layer and the data access layer
//!
//! Request input is normalized when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod window;

pub use validation::ValidationError;
pub use user::User;
pub use window::{ListParams, ListWindow};
