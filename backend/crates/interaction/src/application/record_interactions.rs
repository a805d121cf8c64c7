//! Record Interactions Use Case
//!
//! Saves a batch of interactions for one acting user. Every user named in
//! the batch is resolved before anything is written, and the batch is then
//! persisted in a single transaction, so a failed request leaves no trace.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use kernel::id::{InteractionId, UserId};
use platform::clock::Clock;
use serde_json::Value;
use user::UserRepository;

use crate::application::config::InteractionConfig;
use crate::domain::entities::{Interaction, UserSnapshot};
use crate::domain::repository::InteractionRepository;
use crate::domain::services::civil_date;
use crate::domain::validation::validate_batch;
use crate::error::{InteractionError, InteractionResult};

/// One stored record, echoed back to the caller
#[derive(Debug, Clone)]
pub struct CreatedRecord {
    pub id: InteractionId,
    pub interacting_with_user: UserSnapshot,
}

/// Record interactions use case
pub struct RecordInteractionsUseCase<I, U>
where
    I: InteractionRepository,
    U: UserRepository,
{
    interaction_repo: Arc<I>,
    user_repo: Arc<U>,
    clock: Arc<dyn Clock>,
    config: Arc<InteractionConfig>,
}

impl<I, U> RecordInteractionsUseCase<I, U>
where
    I: InteractionRepository,
    U: UserRepository,
{
    pub fn new(
        interaction_repo: Arc<I>,
        user_repo: Arc<U>,
        clock: Arc<dyn Clock>,
        config: Arc<InteractionConfig>,
    ) -> Self {
        Self {
            interaction_repo,
            user_repo,
            clock,
            config,
        }
    }

    /// Validate, resolve and persist `payload` on behalf of `path_user`.
    ///
    /// Returns one [`CreatedRecord`] per payload element, in payload order.
    pub async fn execute(
        &self,
        path_user: &str,
        payload: &Value,
    ) -> InteractionResult<Vec<CreatedRecord>> {
        let batch = validate_batch(payload)?;

        let path_user: Option<UserId> = path_user.parse().ok();
        if path_user != Some(batch.acting_user) {
            return Err(InteractionError::UserMismatch);
        }

        let acting_user = self
            .user_repo
            .find_by_id(&batch.acting_user)
            .await?
            .map(UserSnapshot::from)
            .ok_or(InteractionError::UserNotFound(batch.acting_user))?;

        let mut counterparts: HashMap<UserId, UserSnapshot> = HashMap::new();
        for input in &batch.interactions {
            if let Entry::Vacant(slot) = counterparts.entry(input.interacting_with) {
                let found = self
                    .user_repo
                    .find_by_id(&input.interacting_with)
                    .await?
                    .ok_or(InteractionError::CounterpartNotFound(input.interacting_with))?;
                slot.insert(UserSnapshot::from(found));
            }
        }

        // One instant per request: every record of a batch shares its date.
        let now = self.clock.now();

        let mut interactions = Vec::with_capacity(batch.interactions.len());
        for input in batch.interactions {
            let interacting_user = counterparts
                .get(&input.interacting_with)
                .cloned()
                .ok_or(InteractionError::CounterpartNotFound(input.interacting_with))?;

            interactions.push(Interaction::record(
                acting_user.clone(),
                interacting_user,
                input.interaction_type,
                batch.client_ip.clone(),
                &self.config.office_ip,
                now,
                self.config.business_timezone,
            ));
        }

        self.interaction_repo.insert_batch(&interactions).await?;

        tracing::info!(
            user_id = %acting_user.user_id,
            client_ip = %batch.client_ip,
            date = %civil_date(now, self.config.business_timezone),
            count = interactions.len(),
            "Interactions recorded"
        );

        Ok(interactions
            .into_iter()
            .map(|interaction| CreatedRecord {
                id: interaction.id,
                interacting_with_user: interaction.interacting_user,
            })
            .collect())
    }
}
