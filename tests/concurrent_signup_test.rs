//! Concurrent signups for one email.
//!
//! The uniqueness check is a read followed by a separate write, so two
//! signups that both read before either writes will both succeed. This test
//! pins that behavior down; if the store ever gains an atomic uniqueness
//! constraint, flip the final assertion.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Barrier;
use weatherapp_backend::db::{MemoryDb, UserStore};
use weatherapp_backend::error::AppError;
use weatherapp_backend::models::User;
use weatherapp_backend::services::AuthService;

const NUM_CONCURRENT_SIGNUPS: usize = 2;

/// Holds every email lookup until all signups have done theirs.
struct LockstepStore {
    inner: MemoryDb,
    barrier: Barrier,
}

#[async_trait]
impl UserStore for LockstepStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let found = self.inner.find_by_email(email).await?;
        self.barrier.wait().await;
        Ok(found)
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        self.inner
            .find_by_email_and_password(email, password)
            .await
    }

    async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        self.inner.create(name, email, password).await
    }
}

#[tokio::test]
async fn test_concurrent_signup_same_email_race() {
    let db = MemoryDb::new();
    let store = Arc::new(LockstepStore {
        inner: db.clone(),
        barrier: Barrier::new(NUM_CONCURRENT_SIGNUPS),
    });
    let auth = AuthService::new(store);

    let mut handles = vec![];
    for i in 0..NUM_CONCURRENT_SIGNUPS {
        let auth = auth.clone();
        handles.push(tokio::spawn(async move {
            auth.signup(&json!({
                "name": format!("Racer {}", i),
                "email": "race@example.com",
                "password": "p",
            }))
            .await
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("Task join failed")
            .expect("Signup failed");
    }

    assert_eq!(
        db.user_count(),
        NUM_CONCURRENT_SIGNUPS,
        "Both signups should pass the existence check before either writes"
    );
}
