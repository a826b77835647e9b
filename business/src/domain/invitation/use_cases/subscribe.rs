use async_trait::async_trait;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::{EnrichedInvitation, InvitationDirection};
use crate::domain::shared::live::{StateCallback, Subscription};
use crate::domain::shared::value_objects::UserId;

pub struct SubscribeInvitationsParams {
    /// Signed-in user; without one the subscriber gets a single empty state.
    pub user_id: Option<UserId>,
    pub direction: InvitationDirection,
    pub on_change: StateCallback<EnrichedInvitation>,
}

#[async_trait]
pub trait SubscribeInvitationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SubscribeInvitationsParams,
    ) -> Result<Subscription, InvitationError>;
}
