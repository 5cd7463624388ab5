//! Admin user directory for the puzzle client.
//!
//! Profiles live in a remote relational store alongside five satellite
//! tables (roles, credits, social accounts, wallets, bans). This crate joins
//! them client-side and exposes the admin mutations.
//!
//! # Architecture
//!
//! ```text
//! UserDirectory (orchestrator)
//!   ├── DirectoryStore   = ProfileReader + SatelliteReader + DirectoryWriter
//!   ├── SessionProvider  (caller identity)
//!   ├── NotificationSink (success / failure messages)
//!   └── QueryCache       (one page per search term)
//! ```
//!
//! # Consistency
//!
//! - Satellite queries fail independently. A failed satellite shows as empty
//!   (or as "not banned") and is listed in [`DirectoryPage::degraded`]; the
//!   fetch itself still succeeds.
//! - Every successful mutation marks all cached pages stale instead of
//!   patching them, so the next query refetches from the store.
//!
//! # Usage
//!
//! ```ignore
//! let directory = UserDirectory::new(store, session, notifier);
//! let state = directory.query("ali").await?;
//! directory.promote_to_admin(&UserId::new("user-1")).await?;
//! ```

pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod memory;
pub mod merge;
pub mod mutation;
pub mod notify;
pub mod session;
pub mod traits;
pub mod types;

pub use cache::QueryCache;
pub use config::DirectoryConfig;
pub use directory::{MutationResult, QueryState, UserDirectory};
pub use error::{FetchError, FetchResult, MutationError};
pub use memory::{InMemoryDirectoryStore, Table};
pub use merge::{Satellites, merge_users};
pub use mutation::{MutationHandle, MutationHandles, MutationKind, MutationStatus};
pub use notify::{Notification, NotificationLevel, RecordingSink};
pub use session::StaticSession;
pub use traits::{
    DirectoryStore, DirectoryWriter, NotificationSink, ProfileReader, SatelliteReader, Session,
    SessionProvider, StoreError, StoreResult,
};
pub use types::{
    BanRecord, CreditBalance, DirectoryPage, DirectorySummary, NewBan, Profile, ProfileFilter,
    Role, RoleGrant, SatelliteKind, SocialAccount, UserId, UserRecord, Wallet,
};
