//! Error types surfaced by directory queries and mutations.

use thiserror::Error;

use crate::traits::StoreError;

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Failures that abort a whole directory fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no active session")]
    Unauthenticated,

    #[error("profile query failed")]
    Profiles(#[source] StoreError),
}

/// Failures of an admin mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("no active session")]
    Unauthenticated,

    #[error("you cannot ban yourself")]
    SelfBan,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MutationError {
    /// Text for the failure notification. Store failures use the remote
    /// message when one was supplied, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Store(err) => err.remote_message().unwrap_or(fallback).to_string(),
            Self::Unauthenticated | Self::SelfBan => self.to_string(),
        }
    }
}
