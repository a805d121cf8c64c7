//! In-memory Repository Implementation
//!
//! Keeps interactions in insertion order. Used by tests and local tooling.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use kernel::id::{InteractionId, UserId};

use crate::domain::entities::Interaction;
use crate::domain::repository::InteractionRepository;
use crate::error::InteractionResult;

#[derive(Clone, Default)]
pub struct MemoryInteractionRepository {
    interactions: Arc<RwLock<Vec<Interaction>>>,
}

impl MemoryInteractionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.interactions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InteractionRepository for MemoryInteractionRepository {
    async fn insert_batch(&self, interactions: &[Interaction]) -> InteractionResult<()> {
        // A single write guard makes the batch visible all at once.
        self.interactions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(interactions);
        Ok(())
    }

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> InteractionResult<Vec<Interaction>> {
        let interactions = self
            .interactions
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(interactions
            .iter()
            .filter(|i| i.user.user_id == *user_id && i.date == date)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &InteractionId) -> InteractionResult<Option<Interaction>> {
        let interactions = self
            .interactions
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(interactions.iter().find(|i| i.id == *id).cloned())
    }

    async fn delete_by_id(&self, id: &InteractionId) -> InteractionResult<bool> {
        let mut interactions = self
            .interactions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = interactions.len();
        interactions.retain(|i| i.id != *id);
        Ok(interactions.len() < before)
    }
}
