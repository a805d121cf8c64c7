//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::config::UserConfig;
use crate::application::search_users::SearchUsersUseCase;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;
use crate::presentation::dto::UserSummaryResponse;

/// Shared state for user handlers
#[derive(Clone)]
pub struct UserAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UserConfig>,
}

/// GET /users/{query}
pub async fn search_users<R>(
    State(state): State<UserAppState<R>>,
    Path(query): Path<String>,
) -> UserResult<Json<Vec<UserSummaryResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SearchUsersUseCase::new(state.repo.clone(), state.config.clone());

    let users = use_case.execute(query).await?;

    Ok(Json(users.into_iter().map(UserSummaryResponse::from).collect()))
}
