//! User Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::UserConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UserAppState};

/// Create the user router with PostgreSQL repository
pub fn user_router(repo: PgUserRepository, config: UserConfig) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic user router for any repository implementation
///
/// The path parameter is named `user` so it lines up with the
/// interaction routes nested under `/users/{user}`.
pub fn user_router_generic<R>(repo: R, config: UserConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UserAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/users/{user}", get(handlers::search_users::<R>))
        .with_state(state)
}
