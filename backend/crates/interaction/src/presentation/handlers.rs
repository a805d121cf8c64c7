//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use platform::client::PeerIp;
use platform::clock::Clock;
use serde_json::Value;
use std::sync::Arc;
use user::UserRepository;

use crate::application::config::InteractionConfig;
use crate::application::delete_interaction::DeleteInteractionUseCase;
use crate::application::list_interactions::ListInteractionsUseCase;
use crate::application::record_interactions::RecordInteractionsUseCase;
use crate::domain::repository::InteractionRepository;
use crate::error::InteractionResult;
use crate::presentation::dto::{
    DELETED_MESSAGE, InteractionListResponse, MessageResponse, SaveInteractionsResponse,
};

/// Shared state for interaction handlers
#[derive(Clone)]
pub struct InteractionAppState<I, U>
where
    I: InteractionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub interactions: Arc<I>,
    pub users: Arc<U>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<InteractionConfig>,
}

/// GET /users/{user_id}/interactions/{date}
pub async fn list_interactions<I, U>(
    State(state): State<InteractionAppState<I, U>>,
    Path((user_id, date)): Path<(String, String)>,
) -> InteractionResult<Json<InteractionListResponse>>
where
    I: InteractionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListInteractionsUseCase::new(state.interactions.clone());

    let daily = use_case.execute(&user_id, &date).await?;

    Ok(Json(daily.into()))
}

/// POST /users/{user_id}/interactions
pub async fn save_interactions<I, U>(
    State(state): State<InteractionAppState<I, U>>,
    Path(user_id): Path<String>,
    PeerIp(peer_ip): PeerIp,
    payload: Result<Json<Value>, JsonRejection>,
) -> InteractionResult<Json<SaveInteractionsResponse>>
where
    I: InteractionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(payload) = payload?;

    // The score uses the asserted clientIP; the observed address is
    // only kept in the logs for auditing.
    tracing::debug!(
        user_id = %user_id,
        peer_ip = ?peer_ip,
        asserted_ip = ?payload.get("clientIP"),
        "Batch save received"
    );

    let use_case = RecordInteractionsUseCase::new(
        state.interactions.clone(),
        state.users.clone(),
        state.clock.clone(),
        state.config.clone(),
    );

    let records = use_case.execute(&user_id, &payload).await?;

    Ok(Json(SaveInteractionsResponse::new(records)))
}

/// DELETE /users/{user_id}/interactions/{interaction_id}
pub async fn delete_interaction<I, U>(
    State(state): State<InteractionAppState<I, U>>,
    Path((_user_id, interaction_id)): Path<(String, String)>,
) -> InteractionResult<Json<MessageResponse>>
where
    I: InteractionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteInteractionUseCase::new(
        state.interactions.clone(),
        state.clock.clone(),
        state.config.clone(),
    );

    use_case.execute(&interaction_id).await?;

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
