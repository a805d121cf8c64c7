//! Delete Interaction Use Case

use std::sync::Arc;

use kernel::id::InteractionId;
use platform::clock::Clock;

use crate::application::config::InteractionConfig;
use crate::domain::entities::RecordState;
use crate::domain::repository::InteractionRepository;
use crate::domain::services::civil_date;
use crate::error::{InteractionError, InteractionResult};

/// Delete interaction use case
pub struct DeleteInteractionUseCase<I>
where
    I: InteractionRepository,
{
    interaction_repo: Arc<I>,
    clock: Arc<dyn Clock>,
    config: Arc<InteractionConfig>,
}

impl<I> DeleteInteractionUseCase<I>
where
    I: InteractionRepository,
{
    pub fn new(
        interaction_repo: Arc<I>,
        clock: Arc<dyn Clock>,
        config: Arc<InteractionConfig>,
    ) -> Self {
        Self {
            interaction_repo,
            clock,
            config,
        }
    }

    /// Delete a record created today. Anything older is locked.
    pub async fn execute(&self, interaction_id: &str) -> InteractionResult<()> {
        let id: InteractionId = interaction_id
            .parse()
            .map_err(|_| InteractionError::InteractionNotFound)?;

        let interaction = self
            .interaction_repo
            .find_by_id(&id)
            .await?
            .ok_or(InteractionError::InteractionNotFound)?;

        let today = civil_date(self.clock.now(), self.config.business_timezone);
        if interaction.state_on(today) == RecordState::Locked {
            return Err(InteractionError::NotSameDay {
                created_on: interaction.date,
                today,
            });
        }

        // Lost a race with another delete
        if !self.interaction_repo.delete_by_id(&id).await? {
            return Err(InteractionError::InteractionNotFound);
        }

        tracing::info!(
            interaction_id = %id,
            user_id = %interaction.user.user_id,
            "Interaction deleted"
        );

        Ok(())
    }
}
