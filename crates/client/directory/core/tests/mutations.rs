use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use client_directory_core::{
    BanRecord, CreditBalance, DirectoryConfig, DirectoryStore, DirectoryWriter,
    InMemoryDirectoryStore, MutationError, MutationStatus, NewBan, NotificationLevel, Profile,
    ProfileFilter, ProfileReader, QueryState, RecordingSink, Role, RoleGrant, SatelliteReader,
    SocialAccount, StaticSession, StoreError, StoreResult, UserDirectory, UserId, Wallet,
    config::DEFAULT_BAN_REASON,
};
use tokio::sync::Notify;

const CALLER: &str = "admin-1";

struct Fixture {
    store: Arc<InMemoryDirectoryStore>,
    sink: Arc<RecordingSink>,
    directory: UserDirectory,
}

fn fixture() -> Fixture {
    let store = Arc::new(InMemoryDirectoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    for (id, username) in [(CALLER, "root"), ("u-1", "alice"), ("u-2", "bob")] {
        store.insert_profile(Profile {
            id: UserId::new(id),
            username: username.to_string(),
            display_name: None,
            created_at: Utc::now(),
        });
    }
    let directory = UserDirectory::new(
        store.clone(),
        Arc::new(StaticSession::signed_in(CALLER)),
        sink.clone(),
    );
    Fixture {
        store,
        sink,
        directory,
    }
}

/// Fills the cache for two distinct search terms.
async fn warm_cache(directory: &UserDirectory) {
    directory.query("").await.unwrap();
    directory.query("ali").await.unwrap();
    assert_eq!(directory.is_stale("").await, Some(false));
    assert_eq!(directory.is_stale("ali").await, Some(false));
}

#[tokio::test]
async fn promote_invalidates_every_cached_term_and_notifies() {
    let fx = fixture();
    warm_cache(&fx.directory).await;
    let target = UserId::new("u-1");

    fx.directory.promote_to_admin(&target).await.unwrap();

    assert_eq!(fx.directory.is_stale("").await, Some(true));
    assert_eq!(fx.directory.is_stale("ali").await, Some(true));
    assert_eq!(fx.store.roles_of(&target).len(), 1);
    assert_eq!(fx.directory.mutations().promote.status(), MutationStatus::Succeeded);

    let last = fx.sink.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Success);

    let page = fx.directory.query("ali").await.unwrap();
    assert!(page.page().unwrap().find(&target).unwrap().is_admin());
}

#[tokio::test]
async fn promote_and_demote_are_idempotent() {
    let fx = fixture();
    let target = UserId::new("u-2");

    fx.directory.promote_to_admin(&target).await.unwrap();
    fx.directory.promote_to_admin(&target).await.unwrap();
    let roles = fx.store.roles_of(&target);
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role, Role::Admin);

    fx.directory.demote_from_admin(&target).await.unwrap();
    fx.directory.demote_from_admin(&target).await.unwrap();
    assert!(fx.store.roles_of(&target).is_empty());
    assert_eq!(fx.directory.mutations().demote.status(), MutationStatus::Succeeded);
}

#[tokio::test]
async fn self_ban_is_rejected_before_any_write() {
    let fx = fixture();
    warm_cache(&fx.directory).await;

    let err = fx
        .directory
        .ban(&UserId::new(CALLER), "testing")
        .await
        .unwrap_err();

    assert_eq!(err, MutationError::SelfBan);
    assert_eq!(fx.store.write_count(), 0);
    assert_eq!(fx.directory.is_stale("").await, Some(false));
    assert_eq!(fx.directory.is_stale("ali").await, Some(false));
    assert!(
        fx.sink
            .received()
            .iter()
            .all(|notification| notification.level != NotificationLevel::Success)
    );
    assert_eq!(
        fx.directory.mutations().ban.status(),
        MutationStatus::Failed(MutationError::SelfBan)
    );
}

#[tokio::test]
async fn ban_records_actor_and_default_reason() {
    let fx = fixture();
    let target = UserId::new("u-1");

    fx.directory.ban(&target, "   ").await.unwrap();

    let bans = fx.store.bans_of(&target);
    assert_eq!(bans.len(), 1);
    assert!(bans[0].active);
    assert_eq!(bans[0].reason, DEFAULT_BAN_REASON);
    assert_eq!(bans[0].banned_by, UserId::new(CALLER));

    let page = fx.directory.fetch("").await.unwrap();
    assert!(page.find(&target).unwrap().is_banned());
}

#[tokio::test]
async fn custom_default_reason_comes_from_config() {
    let store = Arc::new(InMemoryDirectoryStore::new());
    let directory = UserDirectory::new(
        store.clone(),
        Arc::new(StaticSession::signed_in(CALLER)),
        Arc::new(RecordingSink::new()),
    )
    .with_config(DirectoryConfig {
        default_ban_reason: "Cheating".into(),
        ..DirectoryConfig::default()
    });

    directory.ban(&UserId::new("u-9"), "").await.unwrap();
    assert_eq!(store.bans_of(&UserId::new("u-9"))[0].reason, "Cheating");
}

#[tokio::test]
async fn unban_stamps_timestamp_and_clears_ban_info() {
    let fx = fixture();
    let target = UserId::new("u-2");
    fx.directory.ban(&target, "abuse").await.unwrap();
    warm_cache(&fx.directory).await;

    fx.directory.unban(&target).await.unwrap();

    let bans = fx.store.bans_of(&target);
    assert!(!bans[0].active);
    assert!(bans[0].unbanned_at.is_some());
    assert_eq!(fx.directory.is_stale("").await, Some(true));

    let state = fx.directory.query("").await.unwrap();
    let user = state.page().unwrap().find(&target).unwrap().clone();
    assert_eq!(user.ban_info, None);
}

#[tokio::test]
async fn remote_failure_notifies_with_remote_message_and_keeps_cache() {
    let fx = fixture();
    warm_cache(&fx.directory).await;
    fx.store.fail_writes(StoreError::Rejected {
        message: Some("new row violates row-level security policy".into()),
    });

    let err = fx
        .directory
        .promote_to_admin(&UserId::new("u-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, MutationError::Store(StoreError::Rejected { .. })));
    assert_eq!(fx.directory.is_stale("").await, Some(false));
    let last = fx.sink.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(last.text, "new row violates row-level security policy");
}

#[tokio::test]
async fn remote_failure_without_message_uses_generic_text() {
    let fx = fixture();
    fx.store.fail_writes(StoreError::Rejected { message: None });

    fx.directory.unban(&UserId::new("u-1")).await.unwrap_err();

    let last = fx.sink.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(last.text, fx.directory.config().generic_error_message);
    assert!(fx.directory.mutations().unban.status().error().is_some());
}

#[tokio::test]
async fn mutations_require_a_session() {
    let store = Arc::new(InMemoryDirectoryStore::new());
    let directory = UserDirectory::new(
        store.clone(),
        Arc::new(StaticSession::signed_out()),
        Arc::new(RecordingSink::new()),
    );

    let err = directory
        .demote_from_admin(&UserId::new("u-1"))
        .await
        .unwrap_err();
    assert_eq!(err, MutationError::Unauthenticated);
    assert_eq!(store.write_count(), 0);
}

/// Store whose first roles read parks until released.
struct GatedStore {
    inner: Arc<InMemoryDirectoryStore>,
    armed: AtomicBool,
    entered: Notify,
    release: Notify,
}

impl GatedStore {
    fn new(inner: Arc<InMemoryDirectoryStore>) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(true),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ProfileReader for GatedStore {
    async fn list_profiles(&self, filter: &ProfileFilter) -> StoreResult<Vec<Profile>> {
        self.inner.list_profiles(filter).await
    }
}

#[async_trait]
impl SatelliteReader for GatedStore {
    async fn list_roles(&self, user_ids: &[UserId]) -> StoreResult<Vec<RoleGrant>> {
        let roles = self.inner.list_roles(user_ids).await;
        if self.armed.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        roles
    }

    async fn list_credits(&self, user_ids: &[UserId]) -> StoreResult<Vec<CreditBalance>> {
        self.inner.list_credits(user_ids).await
    }

    async fn list_social_accounts(&self, user_ids: &[UserId]) -> StoreResult<Vec<SocialAccount>> {
        self.inner.list_social_accounts(user_ids).await
    }

    async fn list_wallets(&self, user_ids: &[UserId]) -> StoreResult<Vec<Wallet>> {
        self.inner.list_wallets(user_ids).await
    }

    async fn list_active_bans(&self, user_ids: &[UserId]) -> StoreResult<Vec<BanRecord>> {
        self.inner.list_active_bans(user_ids).await
    }
}

#[async_trait]
impl DirectoryWriter for GatedStore {
    async fn upsert_role(&self, grant: RoleGrant) -> StoreResult<()> {
        self.inner.upsert_role(grant).await
    }

    async fn delete_role(&self, user_id: &UserId, role: Role) -> StoreResult<()> {
        self.inner.delete_role(user_id, role).await
    }

    async fn insert_ban(&self, ban: NewBan) -> StoreResult<BanRecord> {
        self.inner.insert_ban(ban).await
    }

    async fn deactivate_bans(&self, user_id: &UserId, at: DateTime<Utc>) -> StoreResult<usize> {
        self.inner.deactivate_bans(user_id, at).await
    }
}

impl DirectoryStore for GatedStore {
    fn name(&self) -> &str {
        "gated"
    }
}

#[tokio::test]
async fn mutation_during_inflight_fetch_forces_refetch() {
    let store = Arc::new(InMemoryDirectoryStore::new());
    for (id, username) in [(CALLER, "root"), ("u-1", "alice")] {
        store.insert_profile(Profile {
            id: UserId::new(id),
            username: username.to_string(),
            display_name: None,
            created_at: Utc::now(),
        });
    }
    let gated = Arc::new(GatedStore::new(store));
    let directory = Arc::new(UserDirectory::new(
        gated.clone(),
        Arc::new(StaticSession::signed_in(CALLER)),
        Arc::new(RecordingSink::new()),
    ));
    let target = UserId::new("u-1");

    let inflight = tokio::spawn({
        let directory = directory.clone();
        async move { directory.query("").await }
    });
    gated.entered.notified().await;

    // Nothing is cached yet, so the invalidation marks no entry.
    directory.promote_to_admin(&target).await.unwrap();
    gated.release.notify_one();

    let first = inflight.await.unwrap().unwrap();
    assert!(!first.page().unwrap().find(&target).unwrap().is_admin());
    assert_eq!(directory.is_stale("").await, Some(true));

    let next = directory.query("").await.unwrap();
    assert!(matches!(next, QueryState::Ready { from_cache: false, .. }));
    assert!(next.page().unwrap().find(&target).unwrap().is_admin());
}
