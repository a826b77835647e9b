use std::sync::Arc;

use business::application::invitation::accept::AcceptInvitationUseCaseImpl;
use business::application::invitation::delete::DeleteInvitationUseCaseImpl;
use business::application::invitation::invite_by_email::InviteByEmailUseCaseImpl;
use business::application::invitation::subscribe::SubscribeInvitationsUseCaseImpl;
use business::application::invitation::update_status::UpdateInvitationStatusUseCaseImpl;
use business::application::item::create::CreateListItemUseCaseImpl;
use business::application::item::delete::DeleteListItemUseCaseImpl;
use business::application::item::subscribe::SubscribeListItemsUseCaseImpl;
use business::application::item::toggle::ToggleListItemUseCaseImpl;
use business::application::item::update::UpdateListItemUseCaseImpl;
use business::application::list::create::CreateListUseCaseImpl;
use business::application::list::delete::DeleteListUseCaseImpl;
use business::application::list::subscribe::SubscribeListsUseCaseImpl;
use business::application::list::update::UpdateListUseCaseImpl;
use business::application::suggestion::suggest::SuggestItemsUseCaseImpl;
use business::application::user::find_by_email::FindUserByEmailUseCaseImpl;
use business::application::user::sync_profile::SyncUserProfileUseCaseImpl;
use business::domain::catalog::index::CatalogIndex;
use business::domain::invitation::enrichment::InvitationEnricher;
use business::domain::invitation::repository::InvitationRepository;
use business::domain::item::repository::ListItemRepository;
use business::domain::list::repository::ListRepository;
use business::domain::logger::Logger;
use business::domain::user::repository::UserRepository;
use logger::TracingLogger;
use persistence::change_feed::ChangeFeed;
use persistence::invitation::repository::InvitationRepositoryPostgres;
use persistence::list::repository::ListRepositoryPostgres;
use persistence::list_item::repository::ListItemRepositoryPostgres;
use persistence::memory::InMemoryStore;
use persistence::user::repository::UserRepositoryPostgres;

use crate::api::health::routes::HealthApi;
use crate::api::invitation::routes::InvitationApi;
use crate::api::item::routes::ListItemApi;
use crate::api::list::routes::ListApi;
use crate::api::suggestion::routes::SuggestionApi;
use crate::api::user::routes::UserApi;
use crate::config::database_config;
use crate::config::store_config::{StoreBackend, StoreConfig};

/// The four repository ports, backed by one document store.
struct Repositories {
    users: Arc<dyn UserRepository>,
    lists: Arc<dyn ListRepository>,
    items: Arc<dyn ListItemRepository>,
    invitations: Arc<dyn InvitationRepository>,
}

impl Repositories {
    async fn connect(config: &StoreConfig) -> anyhow::Result<Self> {
        match config.backend {
            StoreBackend::Postgres => {
                let pool = database_config::init_database(config).await?;
                let feed = ChangeFeed::start(&pool).await?;
                Ok(Self {
                    users: Arc::new(UserRepositoryPostgres::new(pool.clone())),
                    lists: Arc::new(ListRepositoryPostgres::new(pool.clone(), feed.clone())),
                    items: Arc::new(ListItemRepositoryPostgres::new(pool.clone(), feed.clone())),
                    invitations: Arc::new(InvitationRepositoryPostgres::new(pool, feed)),
                })
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on restart");
                let store = Arc::new(InMemoryStore::new());
                Ok(Self {
                    users: store.clone(),
                    lists: store.clone(),
                    items: store.clone(),
                    invitations: store,
                })
            }
        }
    }
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub user_api: UserApi,
    pub list_api: ListApi,
    pub list_item_api: ListItemApi,
    pub invitation_api: InvitationApi,
    pub suggestion_api: SuggestionApi,
}

impl DependencyContainer {
    pub async fn new(config: &StoreConfig) -> anyhow::Result<Self> {
        let repositories = Repositories::connect(config).await?;
        Ok(Self::wire(config, repositories))
    }

    fn wire(config: &StoreConfig, repositories: Repositories) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let Repositories {
            users,
            lists,
            items,
            invitations,
        } = repositories;
        let catalog = Arc::new(CatalogIndex::builtin().clone());

        let user_api = UserApi::new(
            Arc::new(SyncUserProfileUseCaseImpl {
                repository: users.clone(),
                logger: logger.clone(),
            }),
            Arc::new(FindUserByEmailUseCaseImpl {
                repository: users.clone(),
                logger: logger.clone(),
            }),
        );

        let list_api = ListApi::new(
            Arc::new(CreateListUseCaseImpl {
                repository: lists.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateListUseCaseImpl {
                repository: lists.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteListUseCaseImpl {
                repository: lists.clone(),
                item_repository: items.clone(),
                invitation_repository: invitations.clone(),
                policy: config.list_delete_policy,
                logger: logger.clone(),
            }),
            Arc::new(SubscribeListsUseCaseImpl {
                repository: lists.clone(),
                logger: logger.clone(),
            }),
        );

        let list_item_api = ListItemApi::new(
            Arc::new(CreateListItemUseCaseImpl {
                repository: items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateListItemUseCaseImpl {
                repository: items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ToggleListItemUseCaseImpl {
                repository: items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteListItemUseCaseImpl {
                repository: items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SubscribeListItemsUseCaseImpl {
                repository: items.clone(),
                logger: logger.clone(),
            }),
        );

        let enricher = Arc::new(InvitationEnricher {
            users: users.clone(),
            lists: lists.clone(),
            logger: logger.clone(),
        });
        let invitation_api = InvitationApi::new(
            Arc::new(InviteByEmailUseCaseImpl {
                repository: invitations.clone(),
                user_repository: users,
                logger: logger.clone(),
            }),
            Arc::new(AcceptInvitationUseCaseImpl {
                repository: invitations.clone(),
                list_repository: lists,
                logger: logger.clone(),
            }),
            Arc::new(UpdateInvitationStatusUseCaseImpl {
                repository: invitations.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteInvitationUseCaseImpl {
                repository: invitations.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SubscribeInvitationsUseCaseImpl {
                repository: invitations,
                enricher,
                logger: logger.clone(),
            }),
        );

        let suggestion_api = SuggestionApi::new(
            Arc::new(SuggestItemsUseCaseImpl {
                repository: items,
                catalog: catalog.clone(),
                logger,
            }),
            catalog,
        );

        Self {
            health_api: HealthApi::new(config.backend.as_str()),
            user_api,
            list_api,
            list_item_api,
            invitation_api,
            suggestion_api,
        }
    }
}
