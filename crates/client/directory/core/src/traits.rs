//! Collaborator traits for the user directory.
//!
//! This module defines the seams the orchestrator talks through:
//! - Store: ProfileReader, SatelliteReader, DirectoryWriter (composite DirectoryStore)
//! - Identity: SessionProvider
//! - Feedback: NotificationSink

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::notify::Notification;
use crate::types::{
    BanRecord, CreditBalance, NewBan, Profile, ProfileFilter, Role, RoleGrant, SocialAccount,
    UserId, Wallet,
};

// ============================================================================
// Error Types
// ============================================================================

/// Failures reported by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    /// The backend refused the request; `message` is whatever it said, if anything.
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Backend-specific error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Message suitable for a user-facing notification, when the backend gave one.
    pub fn remote_message(&self) -> Option<&str> {
        let message = match self {
            Self::Network(message) | Self::NotFound(message) | Self::Backend(message) => {
                Some(message.as_str())
            }
            Self::Rejected { message } => message.as_deref(),
        };
        message.filter(|text| !text.trim().is_empty())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Store Traits
// ============================================================================

/// Primary profile query.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Profiles matching `filter`, newest first.
    async fn list_profiles(&self, filter: &ProfileFilter) -> StoreResult<Vec<Profile>>;
}

/// Secondary collections scoped to a set of user ids.
///
/// Each call is independent; rows come back in the store's own order.
#[async_trait]
pub trait SatelliteReader: Send + Sync {
    async fn list_roles(&self, user_ids: &[UserId]) -> StoreResult<Vec<RoleGrant>>;

    async fn list_credits(&self, user_ids: &[UserId]) -> StoreResult<Vec<CreditBalance>>;

    async fn list_social_accounts(&self, user_ids: &[UserId]) -> StoreResult<Vec<SocialAccount>>;

    async fn list_wallets(&self, user_ids: &[UserId]) -> StoreResult<Vec<Wallet>>;

    /// Only records with `active == true`.
    async fn list_active_bans(&self, user_ids: &[UserId]) -> StoreResult<Vec<BanRecord>>;
}

/// Writes issued by admin mutations.
#[async_trait]
pub trait DirectoryWriter: Send + Sync {
    /// Inserts the grant, or leaves the existing `(user_id, role)` row in place.
    async fn upsert_role(&self, grant: RoleGrant) -> StoreResult<()>;

    /// Removes the `(user_id, role)` row; absent rows are not an error.
    async fn delete_role(&self, user_id: &UserId, role: Role) -> StoreResult<()>;

    async fn insert_ban(&self, ban: NewBan) -> StoreResult<BanRecord>;

    /// Marks every active ban of `user_id` inactive, returning how many changed.
    async fn deactivate_bans(&self, user_id: &UserId, at: DateTime<Utc>) -> StoreResult<usize>;
}

/// Complete store interface used by the directory.
pub trait DirectoryStore: ProfileReader + SatelliteReader + DirectoryWriter + Send + Sync {
    /// Backend name for logs (e.g. "postgrest", "memory").
    fn name(&self) -> &str;
}

// ============================================================================
// Identity & Feedback
// ============================================================================

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Supplies the caller identity from the external auth collaborator.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> Option<Session>;

    /// Caller id known without a round trip, used to enable or disable queries.
    fn known_user(&self) -> Option<UserId>;
}

/// Fire-and-forget "show message" capability.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
