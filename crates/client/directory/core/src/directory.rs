//! User directory orchestrator.
//!
//! Fetches profiles, joins satellite collections, caches merged pages per
//! search term, and runs admin mutations followed by whole-cache invalidation.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::cache::QueryCache;
use crate::config::DirectoryConfig;
use crate::error::{FetchError, FetchResult, MutationError};
use crate::merge::{Satellites, merge_users};
use crate::mutation::{MutationHandles, MutationKind, MutationStatus};
use crate::notify::Notification;
use crate::traits::{DirectoryStore, NotificationSink, Session, SessionProvider, StoreResult};
use crate::types::{DirectoryPage, NewBan, ProfileFilter, Role, RoleGrant, SatelliteKind, UserId};

pub type MutationResult = Result<(), MutationError>;

/// Outcome of a cache-backed directory query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryState {
    /// No caller identity is known; nothing was fetched.
    Disabled,
    Ready {
        page: DirectoryPage,
        from_cache: bool,
    },
}

impl QueryState {
    pub fn page(&self) -> Option<&DirectoryPage> {
        match self {
            Self::Disabled => None,
            Self::Ready { page, .. } => Some(page),
        }
    }
}

/// Admin view over the remote user directory.
///
/// Collaborators are injected so the orchestration stays independent of the
/// backend, the auth provider, and the notification UI.
pub struct UserDirectory {
    store: Arc<dyn DirectoryStore>,
    session: Arc<dyn SessionProvider>,
    notifier: Arc<dyn NotificationSink>,
    cache: RwLock<QueryCache>,
    mutations: MutationHandles,
    config: DirectoryConfig,
}

impl UserDirectory {
    pub fn new(
        store: Arc<dyn DirectoryStore>,
        session: Arc<dyn SessionProvider>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            session,
            notifier,
            cache: RwLock::new(QueryCache::new()),
            mutations: MutationHandles::default(),
            config: DirectoryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.cache = RwLock::new(QueryCache::with_capacity(config.cache_capacity));
        self.config = config;
        self
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn mutations(&self) -> &MutationHandles {
        &self.mutations
    }

    /// Caller id reported by the session provider.
    pub fn signed_in_user(&self) -> Option<UserId> {
        self.session.known_user()
    }

    /// Queries run only while a caller identity is known.
    pub fn is_enabled(&self) -> bool {
        self.signed_in_user().is_some()
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Cache-backed list: returns the fresh cached page for `term`, or fetches
    /// and caches it. A page whose fetch overlapped a mutation is returned but
    /// cached stale, so the next query refetches.
    pub async fn query(&self, term: &str) -> FetchResult<QueryState> {
        if !self.is_enabled() {
            tracing::debug!("Directory query skipped: no known caller");
            return Ok(QueryState::Disabled);
        }

        let generation = {
            let cache = self.cache.read().await;
            if let Some(page) = cache.fresh(term) {
                return Ok(QueryState::Ready {
                    page: page.clone(),
                    from_cache: true,
                });
            }
            cache.generation()
        };

        let page = self.fetch(term).await?;
        let current = self
            .cache
            .write()
            .await
            .insert_as_of(term, page.clone(), Utc::now(), generation);
        if !current {
            tracing::debug!(search = term, "Directory changed during fetch, page cached as stale");
        }

        Ok(QueryState::Ready {
            page,
            from_cache: false,
        })
    }

    /// Uncached directory fetch.
    ///
    /// Profiles are fetched first; satellites are only queried for a
    /// non-empty id set and are awaited together. A satellite failure is
    /// logged and degrades its field instead of failing the fetch.
    pub async fn fetch(&self, term: &str) -> FetchResult<DirectoryPage> {
        let session = self
            .session
            .current_session()
            .await
            .ok_or(FetchError::Unauthenticated)?;

        let filter = ProfileFilter::from_term(term);
        tracing::debug!(
            caller = %session.user_id,
            search = ?filter.search,
            store = self.store.name(),
            "Fetching directory"
        );

        let profiles = self
            .store
            .list_profiles(&filter)
            .await
            .map_err(FetchError::Profiles)?;

        if profiles.is_empty() {
            return Ok(DirectoryPage::default());
        }

        let ids: Vec<UserId> = profiles.iter().map(|profile| profile.id.clone()).collect();
        let store = &self.store;
        let (roles, credits, social_accounts, wallets, bans) = tokio::join!(
            store.list_roles(&ids),
            store.list_credits(&ids),
            store.list_social_accounts(&ids),
            store.list_wallets(&ids),
            store.list_active_bans(&ids),
        );

        let satellites = Satellites {
            roles: logged(SatelliteKind::Roles, roles),
            credits: logged(SatelliteKind::Credits, credits),
            social_accounts: logged(SatelliteKind::SocialAccounts, social_accounts),
            wallets: logged(SatelliteKind::Wallets, wallets),
            bans: logged(SatelliteKind::Bans, bans),
        };

        let page = merge_users(profiles, satellites);
        tracing::debug!(
            users = page.users.len(),
            degraded = page.degraded.len(),
            "Directory fetch complete"
        );
        Ok(page)
    }

    /// Cached page for `term`, stale or not, without fetching.
    pub async fn cached(&self, term: &str) -> Option<DirectoryPage> {
        self.cache.read().await.get(term).cloned()
    }

    pub async fn is_stale(&self, term: &str) -> Option<bool> {
        self.cache.read().await.is_stale(term)
    }

    /// Marks every cached page stale.
    pub async fn invalidate_all(&self) -> usize {
        self.cache.write().await.invalidate_all()
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Grants the admin role. Repeating it leaves a single grant.
    pub async fn promote_to_admin(&self, user_id: &UserId) -> MutationResult {
        self.begin(MutationKind::PromoteToAdmin);
        let result = async {
            self.caller().await?;
            self.store
                .upsert_role(RoleGrant {
                    user_id: user_id.clone(),
                    role: Role::Admin,
                    granted_at: Utc::now(),
                })
                .await?;
            Ok::<_, MutationError>(())
        }
        .await;
        self.finish(MutationKind::PromoteToAdmin, user_id, result)
            .await
    }

    /// Removes the admin role. Removing an absent grant succeeds.
    pub async fn demote_from_admin(&self, user_id: &UserId) -> MutationResult {
        self.begin(MutationKind::DemoteFromAdmin);
        let result = async {
            self.caller().await?;
            self.store.delete_role(user_id, Role::Admin).await?;
            Ok::<_, MutationError>(())
        }
        .await;
        self.finish(MutationKind::DemoteFromAdmin, user_id, result)
            .await
    }

    /// Bans `user_id` on behalf of the caller.
    ///
    /// Banning oneself is rejected before any store call. A blank reason is
    /// replaced with the configured default.
    pub async fn ban(&self, user_id: &UserId, reason: &str) -> MutationResult {
        self.begin(MutationKind::Ban);
        let result = async {
            let caller = self.caller().await?;
            if &caller.user_id == user_id {
                return Err(MutationError::SelfBan);
            }
            self.store
                .insert_ban(NewBan {
                    user_id: user_id.clone(),
                    reason: self.config.ban_reason(reason),
                    banned_by: caller.user_id,
                })
                .await?;
            Ok::<_, MutationError>(())
        }
        .await;
        self.finish(MutationKind::Ban, user_id, result).await
    }

    /// Deactivates every active ban of `user_id`.
    pub async fn unban(&self, user_id: &UserId) -> MutationResult {
        self.begin(MutationKind::Unban);
        let result = async {
            self.caller().await?;
            let lifted = self.store.deactivate_bans(user_id, Utc::now()).await?;
            tracing::debug!(user = %user_id, lifted, "Bans deactivated");
            Ok::<_, MutationError>(())
        }
        .await;
        self.finish(MutationKind::Unban, user_id, result).await
    }

    async fn caller(&self) -> Result<Session, MutationError> {
        self.session
            .current_session()
            .await
            .ok_or(MutationError::Unauthenticated)
    }

    fn begin(&self, kind: MutationKind) {
        self.mutations.get(kind).set(MutationStatus::Pending);
    }

    async fn finish(
        &self,
        kind: MutationKind,
        user_id: &UserId,
        result: MutationResult,
    ) -> MutationResult {
        match &result {
            Ok(()) => {
                let invalidated = self.invalidate_all().await;
                tracing::info!(mutation = %kind, user = %user_id, invalidated, "Mutation succeeded");
                self.notifier
                    .notify(Notification::success(kind.success_message()));
            }
            Err(err) => {
                tracing::error!(mutation = %kind, user = %user_id, "Mutation failed: {}", err);
                self.notifier.notify(Notification::error(
                    err.user_message(&self.config.generic_error_message),
                ));
            }
        }

        self.mutations.get(kind).settle(&result);
        result
    }
}

fn logged<T>(kind: SatelliteKind, result: StoreResult<Vec<T>>) -> StoreResult<Vec<T>> {
    if let Err(err) = &result {
        tracing::warn!(satellite = %kind, "Satellite fetch failed, showing as empty: {}", err);
    }
    result
}
