//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts: phone
//! numbers in canonical E.164 form and opaque user identifiers. These
//! value objects validate at construction time and prevent invalid data
//! from entering any set in the store.

pub mod errors;
pub mod phone;
pub mod user_id;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use user_id::UserId;
