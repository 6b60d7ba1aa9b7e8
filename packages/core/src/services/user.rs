//! User lookups, registration and the database connectivity probe.
//!
//! Failures the client can act on (missing user, bad username, taken
//! username) are raised as [`ApiException`]. Any other storage failure is
//! passed up as [`AppError::Database`] and reported as an internal error.

use std::sync::Arc;

use crate::error::{ApiException, AppError};
use crate::repository::{User, UserStore};

/// Longest accepted username, in characters.
pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn check_connection(&self) -> Result<i64, AppError> {
        Ok(self.store.find_one().await?)
    }

    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::from(ApiException::user_not_found(format!("user {} not found", id))))
    }

    pub async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let username = validate_username(username)?;

        match self.store.insert(username).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "User created");
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(ApiException::duplicate_resource(
                format!("username '{}' is already taken", username),
            )
            .into()),
            Err(err) => Err(err.into()),
        }
    }
}

fn validate_username(raw: &str) -> Result<&str, ApiException> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(ApiException::invalid_request("username must not be blank"));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ApiException::invalid_request(format!(
            "username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }

    Ok(username)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
