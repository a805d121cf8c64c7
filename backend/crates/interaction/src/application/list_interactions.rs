//! List Interactions Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::UserId;

use crate::domain::entities::Interaction;
use crate::domain::repository::InteractionRepository;
use crate::domain::services::parse_civil_date;
use crate::error::{InteractionError, InteractionResult};

/// A user's interactions on one civil day
#[derive(Debug, Clone)]
pub struct DailyInteractions {
    /// The user id exactly as requested
    pub user_id: String,
    pub date: NaiveDate,
    pub interactions: Vec<Interaction>,
}

/// List interactions use case
pub struct ListInteractionsUseCase<I>
where
    I: InteractionRepository,
{
    interaction_repo: Arc<I>,
}

impl<I> ListInteractionsUseCase<I>
where
    I: InteractionRepository,
{
    pub fn new(interaction_repo: Arc<I>) -> Self {
        Self { interaction_repo }
    }

    pub async fn execute(&self, user_id: &str, date: &str) -> InteractionResult<DailyInteractions> {
        let date =
            parse_civil_date(date).ok_or_else(|| InteractionError::InvalidDate(date.to_string()))?;

        // An id that cannot exist has no interactions.
        let interactions = match user_id.parse::<UserId>() {
            Ok(id) => {
                self.interaction_repo
                    .find_by_user_and_date(&id, date)
                    .await?
            }
            Err(_) => Vec::new(),
        };

        tracing::debug!(
            user_id = %user_id,
            date = %date,
            count = interactions.len(),
            "Listed interactions"
        );

        Ok(DailyInteractions {
            user_id: user_id.to_string(),
            date,
            interactions,
        })
    }
}
