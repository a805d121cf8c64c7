//! Interaction Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::clock::{Clock, SystemClock};
use std::sync::Arc;
use user::{PgUserRepository, UserRepository};

use crate::application::config::InteractionConfig;
use crate::domain::repository::InteractionRepository;
use crate::infra::postgres::PgInteractionRepository;
use crate::presentation::handlers::{self, InteractionAppState};

/// Create the interaction router with PostgreSQL repositories
pub fn interaction_router(
    interactions: PgInteractionRepository,
    users: PgUserRepository,
    config: InteractionConfig,
) -> Router {
    interaction_router_generic(interactions, users, Arc::new(SystemClock), config)
}

/// Create a generic interaction router for any repository implementation
///
/// The second segment after `/interactions` is a date for GET and an
/// interaction id for DELETE.
pub fn interaction_router_generic<I, U>(
    interactions: I,
    users: U,
    clock: Arc<dyn Clock>,
    config: InteractionConfig,
) -> Router
where
    I: InteractionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = InteractionAppState {
        interactions: Arc::new(interactions),
        users: Arc::new(users),
        clock,
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/users/{user}/interactions",
            post(handlers::save_interactions::<I, U>),
        )
        .route(
            "/users/{user}/interactions/{key}",
            get(handlers::list_interactions::<I, U>).delete(handlers::delete_interaction::<I, U>),
        )
        .with_state(state)
}
