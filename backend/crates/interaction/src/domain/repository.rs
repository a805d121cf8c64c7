//! Repository Traits
//!
//! Interfaces for interaction persistence. Implementation is in the
//! infrastructure layer.

use chrono::NaiveDate;
use kernel::id::{InteractionId, UserId};

use crate::domain::entities::Interaction;
use crate::error::InteractionResult;

/// Interaction repository trait
#[trait_variant::make(InteractionRepository: Send)]
pub trait LocalInteractionRepository {
    /// Persist every record or none of them
    async fn insert_batch(&self, interactions: &[Interaction]) -> InteractionResult<()>;

    /// Records of `user_id` stamped with `date`, in insertion order
    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> InteractionResult<Vec<Interaction>>;

    /// Find interaction by ID
    async fn find_by_id(&self, id: &InteractionId) -> InteractionResult<Option<Interaction>>;

    /// Delete interaction by ID. Returns `false` when nothing was removed.
    async fn delete_by_id(&self, id: &InteractionId) -> InteractionResult<bool>;
}
