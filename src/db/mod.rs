//! Database layer.
//!
//! Services talk to the [`UserStore`] and [`CityStore`] traits; `main` picks
//! the Firestore or in-memory adapter from config.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::AppError;
use crate::models::{City, User};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Cached weather records (keyed by lowercased city name)
    pub const CITIES: &str = "cities";
}

/// Persistence for user accounts.
///
/// Adapters do not enforce email uniqueness. Every failure is reported as
/// [`AppError::StoreUnavailable`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the first user with this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Find a user whose email and password both match exactly.
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError>;

    /// Insert a new user and return it with its assigned ID.
    async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, AppError>;
}

/// Persistence for cached weather records, keyed by [`crate::models::city_key`].
#[async_trait]
pub trait CityStore: Send + Sync {
    async fn get_city(&self, key: &str) -> Result<Option<City>, AppError>;

    async fn list_cities(&self) -> Result<Vec<City>, AppError>;

    /// Create or replace the record stored under `city.key()`.
    async fn upsert_city(&self, city: &City) -> Result<(), AppError>;

    /// Delete a record. Returns whether one existed.
    async fn delete_city(&self, key: &str) -> Result<bool, AppError>;
}
