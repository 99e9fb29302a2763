//! PhoneDB - a contact-matching engine over a Redis set store.
//!
//! PhoneDB answers two questions for an application: which phone numbers
//! are already registered with the app, and which of two users' address-book
//! contacts overlap. All registered numbers live in one set, each user's
//! contacts in another, and set intersection does the matching.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `UserId`)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **store**: Set store abstraction with Redis and in-memory backends
//! - **phonedb**: The engine itself (`PhoneDb`)
//!
//! # Example
//!
//! ```no_run
//! use phonedb::{MemorySetStore, PhoneDb};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), phonedb::PhoneDbError> {
//! let db = PhoneDb::new(Arc::new(MemorySetStore::new()));
//!
//! db.register("+18475557777").await?;
//! db.add_contacts("user1", ["+18475557777", "+14157775555"]).await?;
//!
//! // Which of user1's contacts are on the app?
//! let on_app = db.get_contacts("user1", true).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod phonedb;
pub mod store;

pub use config::Config;
pub use domain::{PhoneNumber, UserId, ValidationError};
pub use error::{ConfigError, PhoneDbError, PhoneDbResult, StoreError};
pub use phonedb::{PhoneDb, REGISTERED_SET_KEY};
pub use store::{MemorySetStore, RedisSetStore, SetStore};
