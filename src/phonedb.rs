//! The PhoneDB contact-matching engine.
//!
//! PhoneDB stores phone numbers in a set store. All registered numbers for
//! the app live in one set, and each user has a set of contacts. Set
//! intersection answers which contacts two users share and which contacts
//! are registered with the app.

use crate::domain::{PhoneNumber, UserId};
use crate::error::PhoneDbResult;
use crate::store::SetStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Key of the set holding every registered phone number.
///
/// Key names are part of the stored data layout and must stay stable.
pub const REGISTERED_SET_KEY: &str = "users:phone";

/// Key of the contact set for a given user.
fn contacts_key(user_id: &UserId) -> String {
    format!("user:{}:contacts", user_id)
}

/// The contact-matching engine.
///
/// Holds nothing but a handle to the set store, so a single instance can
/// be cloned and shared across any number of concurrent callers. All state
/// lives in the store; every operation is one independent request to it.
#[derive(Clone)]
pub struct PhoneDb {
    store: Arc<dyn SetStore>,
}

impl PhoneDb {
    /// Create an engine on top of the given set store.
    pub fn new(store: Arc<dyn SetStore>) -> Self {
        Self { store }
    }

    /// Register a phone number as belonging to an app user.
    ///
    /// Strict, unlike [`add_contacts`](Self::add_contacts): an invalid
    /// number fails the whole call with
    /// [`PhoneDbError::InvalidNumber`](crate::PhoneDbError::InvalidNumber)
    /// before anything reaches the store. Re-registering a number that is
    /// already present is a no-op.
    pub async fn register(&self, phone: &str) -> PhoneDbResult<()> {
        let number = PhoneNumber::parse(phone)?;
        self.store
            .sadd(REGISTERED_SET_KEY, &[number.into_inner()])
            .await?;
        debug!("Added {} to {}", phone, REGISTERED_SET_KEY);
        Ok(())
    }

    /// Store a user's contact list.
    ///
    /// Invalid entries are silently dropped rather than failing the call:
    /// bulk address-book uploads are expected to contain garbage, and one
    /// bad entry must not reject the rest. This is a deliberate policy
    /// difference from the strict [`register`](Self::register) path.
    ///
    /// Returns the number of contacts actually inserted into the user's
    /// set, which can be less than the number of valid entries supplied
    /// when some were already present.
    pub async fn add_contacts<I, S>(&self, user_id: &str, contacts: I) -> PhoneDbResult<u64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let user_id = UserId::new(user_id)?;

        // Filter out invalid numbers, keeping canonical forms
        let numbers: Vec<String> = contacts
            .into_iter()
            .filter_map(|contact| {
                PhoneNumber::parse(contact.as_ref())
                    .ok()
                    .map(PhoneNumber::into_inner)
            })
            .collect();

        let key = contacts_key(&user_id);
        let added = self.store.sadd(&key, &numbers).await?;
        debug!("Added {} contacts to {}", added, key);
        Ok(added)
    }

    /// Contacts that `user_id` and `other_user_id` have in common.
    ///
    /// With `registered_only` set, the result is further limited to
    /// contacts that are themselves registered with the app. A user with
    /// no stored contact set contributes an empty set, so the result is
    /// empty rather than an error.
    pub async fn get_mutual_contacts(
        &self,
        user_id: &str,
        other_user_id: &str,
        registered_only: bool,
    ) -> PhoneDbResult<HashSet<PhoneNumber>> {
        let user_id = UserId::new(user_id)?;
        let other_user_id = UserId::new(other_user_id)?;

        let user_key = contacts_key(&user_id);
        let other_user_key = contacts_key(&other_user_id);

        let members = if registered_only {
            self.store
                .sinter(&[&user_key, &other_user_key, REGISTERED_SET_KEY])
                .await?
        } else {
            self.store.sinter(&[&user_key, &other_user_key]).await?
        };

        debug!(
            "Found {} mutual contacts between {} and {}",
            members.len(),
            user_id,
            other_user_id
        );
        Ok(rehydrate(members))
    }

    /// A user's stored contacts.
    ///
    /// With `registered_only` set, only the contacts already registered
    /// with the app are returned. A missing contact set reads as empty.
    pub async fn get_contacts(
        &self,
        user_id: &str,
        registered_only: bool,
    ) -> PhoneDbResult<HashSet<PhoneNumber>> {
        let user_id = UserId::new(user_id)?;
        let key = contacts_key(&user_id);

        let members = if registered_only {
            self.store.sinter(&[&key, REGISTERED_SET_KEY]).await?
        } else {
            self.store.smembers(&key).await?
        };

        debug!("Found {} contacts for {}", members.len(), user_id);
        Ok(rehydrate(members))
    }

    /// Number of registered phone numbers. Verification helper.
    pub async fn registered_count(&self) -> PhoneDbResult<u64> {
        Ok(self.store.scard(REGISTERED_SET_KEY).await?)
    }
}

/// Wrap canonical members read back from the store.
fn rehydrate(members: HashSet<String>) -> HashSet<PhoneNumber> {
    members.into_iter().map(PhoneNumber::from_canonical).collect()
}
