//! Services Layer
//!
//! Pure checksum logic, free of any HTTP or history concerns.
//! Services can be called directly or through Axum handlers.

pub mod builder;
pub mod check_digit;
pub mod validator;

pub use builder::{build, build_from};
pub use check_digit::compute;
pub use validator::validate;
