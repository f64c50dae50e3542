//! In-process store used for local runs and tests.

use crate::db::{CityStore, UserStore};
use crate::error::AppError;
use crate::models::{City, User};
use crate::time_utils::now_rfc3339;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Memory-backed users and cities.
///
/// Clones share the same maps.
#[derive(Clone, Default)]
pub struct MemoryDb {
    /// Users keyed by assigned ID
    users: Arc<DashMap<String, User>>,
    /// Cities keyed by `city_key`
    cities: Arc<DashMap<String, City>>,
    next_user_id: Arc<AtomicU64>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored user records (duplicates included).
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Remove every user with this email. Returns how many were removed.
    ///
    /// Test cleanup only; accounts are never deleted by the API.
    pub fn delete_users_by_email(&self, email: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|_, user| user.email != email);
        before - self.users.len()
    }

    fn find_user(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.users
            .iter()
            .find(|entry| pred(entry.value()))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl UserStore for MemoryDb {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_user(|u| u.email == email))
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        Ok(self.find_user(|u| u.email == email && u.password == password))
    }

    async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        let id = self.next_user_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut user = User::new(name, email, password, now_rfc3339());
        user.id = Some(id.to_string());

        self.users.insert(id.to_string(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl CityStore for MemoryDb {
    async fn get_city(&self, key: &str) -> Result<Option<City>, AppError> {
        Ok(self.cities.get(key).map(|entry| entry.value().clone()))
    }

    async fn list_cities(&self) -> Result<Vec<City>, AppError> {
        let mut cities: Vec<City> = self
            .cities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        cities.sort_by(|a, b| a.city_name.cmp(&b.city_name));
        Ok(cities)
    }

    async fn upsert_city(&self, city: &City) -> Result<(), AppError> {
        self.cities.insert(city.key(), city.clone());
        Ok(())
    }

    async fn delete_city(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.cities.remove(key).is_some())
    }
}
