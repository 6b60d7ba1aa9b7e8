//! Shared handler state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::repository::{HelloRepository, UserRepository};
use crate::services::{HelloService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub hello: HelloService,
    pub users: UserService,
}

impl AppState {
    pub fn new(hello: HelloService, users: UserService) -> Self {
        Self { hello, users }
    }

    /// Wire services to repositories backed by `pool`.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(
            HelloService::new(HelloRepository::new()),
            UserService::new(Arc::new(UserRepository::new(pool))),
        )
    }
}
