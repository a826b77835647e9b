use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::item::repository::ListItemRepository;
use crate::domain::list::errors::ListError;
use crate::domain::list::policy::ListDeletionPolicy;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::delete::{DeleteListParams, DeleteListUseCase};
use crate::domain::logger::Logger;

/// Deletes a list. Under [`ListDeletionPolicy::KeepChildren`] its items and
/// invitations stay behind as orphans; under [`ListDeletionPolicy::Cascade`]
/// they are removed first so a failure never leaves children of a missing
/// list behind a successful call.
pub struct DeleteListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub item_repository: Arc<dyn ListItemRepository>,
    pub invitation_repository: Arc<dyn InvitationRepository>,
    pub policy: ListDeletionPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteListUseCase for DeleteListUseCaseImpl {
    async fn execute(&self, params: DeleteListParams) -> Result<(), ListError> {
        self.logger.info(&format!(
            "Deleting list {} ({} policy)",
            params.id, self.policy
        ));

        self.repository
            .get_by_id(params.id)
            .await?
            .ok_or(ListError::NotFound)?;

        if self.policy == ListDeletionPolicy::Cascade {
            let items = self.item_repository.delete_all(params.id).await?;
            let invitations = self
                .invitation_repository
                .delete_for_list(params.id)
                .await?;
            self.logger.debug(&format!(
                "Removed {} items and {} invitations of list {}",
                items, invitations, params.id
            ));
        }

        self.repository
            .delete(params.id)
            .await
            .inspect_err(|err| self.logger.failure("delete list", err))?;

        self.logger.info(&format!("List deleted: {}", params.id));
        Ok(())
    }
}
