//! Process-local store implementing every repository port.
//!
//! Each watcher is re-evaluated against the full state after every write and
//! receives a fresh snapshot, mirroring how the Postgres change feed refetches.
//! Failures can be injected per operation, or for the whole store, to exercise
//! the error paths of the use cases.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::invitation::model::{
    Invitation, InvitationDirection, InvitationStatus, NewInvitation,
};
use business::domain::invitation::repository::InvitationRepository;
use business::domain::item::model::{ListItem, ListItemPatch, NewListItem};
use business::domain::item::repository::ListItemRepository;
use business::domain::list::model::{ListPatch, NewShoppingList, ShoppingList};
use business::domain::list::repository::ListRepository;
use business::domain::shared::live::{LiveQuery, SnapshotSender};
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

/// Write operations that can be made to fail on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    UpsertUser,
    CreateList,
    UpdateList,
    AddCollaborator,
    DeleteList,
    CreateItem,
    UpdateItem,
    DeleteItem,
    CreateInvitation,
    UpdateInvitationStatus,
    DeleteInvitation,
}

enum Watcher {
    Lists {
        member: UserId,
        sender: SnapshotSender<ShoppingList>,
    },
    Items {
        list_id: Uuid,
        sender: SnapshotSender<ListItem>,
    },
    Invitations {
        direction: InvitationDirection,
        user_id: UserId,
        sender: SnapshotSender<Invitation>,
    },
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    lists: Vec<ShoppingList>,
    items: Vec<ListItem>,
    invitations: Vec<Invitation>,
    watchers: Vec<Watcher>,
    unavailable: bool,
    failing: HashSet<StoreOperation>,
}

impl State {
    fn check(&self, operation: Option<StoreOperation>) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::unavailable("store offline"));
        }
        match operation {
            Some(op) if self.failing.contains(&op) => {
                Err(RepositoryError::unavailable(format!("{:?} failed", op)))
            }
            _ => Ok(()),
        }
    }

    fn lists_for(&self, member: &UserId) -> Vec<ShoppingList> {
        let mut lists: Vec<ShoppingList> = self
            .lists
            .iter()
            .filter(|l| l.is_member(member))
            .cloned()
            .collect();
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        lists
    }

    fn items_of(&self, list_id: Uuid) -> Vec<ListItem> {
        // insertion order is creation order
        self.items
            .iter()
            .filter(|i| i.list_id == list_id)
            .cloned()
            .collect()
    }

    fn invitations_for(&self, direction: InvitationDirection, user_id: &UserId) -> Vec<Invitation> {
        self.invitations
            .iter()
            .rev()
            .filter(|i| direction.matches(i, user_id))
            .cloned()
            .collect()
    }

    fn emit(&self, watcher: &Watcher) -> bool {
        let error = self
            .unavailable
            .then(|| RepositoryError::unavailable("store offline"));
        match watcher {
            Watcher::Lists { member, sender } => sender
                .send(error.map_or_else(|| Ok(self.lists_for(member)), Err))
                .is_ok(),
            Watcher::Items { list_id, sender } => sender
                .send(error.map_or_else(|| Ok(self.items_of(*list_id)), Err))
                .is_ok(),
            Watcher::Invitations {
                direction,
                user_id,
                sender,
            } => sender
                .send(error.map_or_else(|| Ok(self.invitations_for(*direction, user_id)), Err))
                .is_ok(),
        }
    }

    /// Pushes a fresh snapshot to every watcher and forgets closed ones.
    fn notify(&mut self) {
        let watchers = std::mem::take(&mut self.watchers);
        let alive: Vec<Watcher> = watchers.into_iter().filter(|w| self.emit(w)).collect();
        self.watchers = alive;
    }

    fn register(&mut self, watcher: Watcher) {
        if self.emit(&watcher) {
            self.watchers.push(watcher);
        }
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with `Unavailable` until switched back. Active
    /// live queries receive the error as their next snapshot.
    pub fn set_unavailable(&self, unavailable: bool) {
        let mut state = self.lock();
        state.unavailable = unavailable;
        state.notify();
    }

    pub fn fail(&self, operation: StoreOperation) {
        self.lock().failing.insert(operation);
    }

    pub fn recover(&self, operation: StoreOperation) {
        self.lock().failing.remove(&operation);
    }

    /// Number of live queries whose consumers are still attached.
    pub fn active_watchers(&self) -> usize {
        let mut state = self.lock();
        state.watchers.retain(|w| match w {
            Watcher::Lists { sender, .. } => !sender.is_closed(),
            Watcher::Items { sender, .. } => !sender.is_closed(),
            Watcher::Invitations { sender, .. } => !sender.is_closed(),
        });
        state.watchers.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // a panic while holding the lock cannot leave the state half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        Ok(state.users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn upsert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::UpsertUser))?;
        match state.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => state.users.push(user.clone()),
        }
        state.notify();
        Ok(())
    }
}

#[async_trait]
impl ListRepository for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ShoppingList>, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        Ok(state.lists.iter().find(|l| l.id == id).cloned())
    }

    async fn watch_for_member(
        &self,
        user_id: &UserId,
    ) -> Result<LiveQuery<ShoppingList>, RepositoryError> {
        let mut state = self.lock();
        state.check(None)?;
        let (sender, query) = LiveQuery::channel();
        state.register(Watcher::Lists {
            member: user_id.clone(),
            sender,
        });
        Ok(query)
    }

    async fn create(&self, list: &NewShoppingList) -> Result<ShoppingList, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::CreateList))?;
        let now = Utc::now();
        let created = ShoppingList::from_repository(
            Uuid::new_v4(),
            list.owner_id.clone(),
            list.title.clone(),
            list.description.clone(),
            list.collaborators.clone(),
            now,
            now,
        );
        state.lists.push(created.clone());
        state.notify();
        Ok(created)
    }

    async fn update(&self, id: Uuid, patch: &ListPatch) -> Result<ShoppingList, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::UpdateList))?;
        let list = state
            .lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepositoryError::NotFound)?;
        list.apply(patch, Utc::now());
        let updated = list.clone();
        state.notify();
        Ok(updated)
    }

    async fn add_collaborator(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::AddCollaborator))?;
        let list = state
            .lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepositoryError::NotFound)?;
        if list.add_collaborator(user_id.clone()) {
            list.updated_at = Utc::now();
            state.notify();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::DeleteList))?;
        state.lists.retain(|l| l.id != id);
        state.notify();
        Ok(())
    }
}

#[async_trait]
impl ListItemRepository for InMemoryStore {
    async fn get_all(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        Ok(state.items_of(list_id))
    }

    async fn get_by_id(&self, list_id: Uuid, id: Uuid) -> Result<ListItem, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        state
            .items
            .iter()
            .find(|i| i.list_id == list_id && i.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn watch(&self, list_id: Uuid) -> Result<LiveQuery<ListItem>, RepositoryError> {
        let mut state = self.lock();
        state.check(None)?;
        let (sender, query) = LiveQuery::channel();
        state.register(Watcher::Items { list_id, sender });
        Ok(query)
    }

    async fn create(&self, item: &NewListItem) -> Result<ListItem, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::CreateItem))?;
        let now = Utc::now();
        let created = ListItem::from_repository(
            Uuid::new_v4(),
            item.list_id,
            item.name.clone(),
            item.quantity.clone(),
            item.category.clone(),
            item.emoji.clone(),
            item.note.clone(),
            false,
            now,
            now,
        );
        state.items.push(created.clone());
        state.notify();
        Ok(created)
    }

    async fn update(
        &self,
        list_id: Uuid,
        id: Uuid,
        patch: &ListItemPatch,
    ) -> Result<ListItem, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::UpdateItem))?;
        let item = state
            .items
            .iter_mut()
            .find(|i| i.list_id == list_id && i.id == id)
            .ok_or(RepositoryError::NotFound)?;
        item.apply(patch, Utc::now());
        let updated = item.clone();
        state.notify();
        Ok(updated)
    }

    async fn delete(&self, list_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::DeleteItem))?;
        state.items.retain(|i| !(i.list_id == list_id && i.id == id));
        state.notify();
        Ok(())
    }

    async fn delete_all(&self, list_id: Uuid) -> Result<u64, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::DeleteItem))?;
        let before = state.items.len();
        state.items.retain(|i| i.list_id != list_id);
        let removed = (before - state.items.len()) as u64;
        state.notify();
        Ok(removed)
    }
}

#[async_trait]
impl InvitationRepository for InMemoryStore {
    async fn watch(
        &self,
        direction: InvitationDirection,
        user_id: &UserId,
    ) -> Result<LiveQuery<Invitation>, RepositoryError> {
        let mut state = self.lock();
        state.check(None)?;
        let (sender, query) = LiveQuery::channel();
        state.register(Watcher::Invitations {
            direction,
            user_id: user_id.clone(),
            sender,
        });
        Ok(query)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Invitation>, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        Ok(state.invitations.iter().find(|i| i.id == id).cloned())
    }

    async fn find_pending(
        &self,
        list_id: Uuid,
        to_user_id: &UserId,
    ) -> Result<Option<Invitation>, RepositoryError> {
        let state = self.lock();
        state.check(None)?;
        Ok(state
            .invitations
            .iter()
            .find(|i| i.list_id == list_id && &i.to_user_id == to_user_id && i.is_pending())
            .cloned())
    }

    async fn create(&self, invitation: &NewInvitation) -> Result<Invitation, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::CreateInvitation))?;
        // same guarantee as the partial unique index in Postgres
        if state.invitations.iter().any(|i| {
            i.list_id == invitation.list_id
                && i.to_user_id == invitation.to_user_id
                && i.is_pending()
        }) {
            return Err(RepositoryError::Duplicated);
        }
        let created = Invitation::from_repository(
            Uuid::new_v4(),
            invitation.list_id,
            invitation.from_user_id.clone(),
            invitation.to_user_id.clone(),
            InvitationStatus::Pending,
            Utc::now(),
        );
        state.invitations.push(created.clone());
        state.notify();
        Ok(created)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: InvitationStatus,
    ) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::UpdateInvitationStatus))?;
        let invitation = state
            .invitations
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RepositoryError::NotFound)?;
        invitation.status = status;
        state.notify();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::DeleteInvitation))?;
        state.invitations.retain(|i| i.id != id);
        state.notify();
        Ok(())
    }

    async fn delete_for_list(&self, list_id: Uuid) -> Result<u64, RepositoryError> {
        let mut state = self.lock();
        state.check(Some(StoreOperation::DeleteInvitation))?;
        let before = state.invitations.len();
        state.invitations.retain(|i| i.list_id != list_id);
        let removed = (before - state.invitations.len()) as u64;
        state.notify();
        Ok(removed)
    }
}
