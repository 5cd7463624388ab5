//! Pending / error / success state of each admin mutation.

use std::sync::{Arc, RwLock};

use crate::error::MutationError;

/// The four directory mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MutationKind {
    PromoteToAdmin,
    DemoteFromAdmin,
    Ban,
    Unban,
}

impl MutationKind {
    /// Notification text on success.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::PromoteToAdmin => "User promoted to admin",
            Self::DemoteFromAdmin => "Admin role removed",
            Self::Ban => "User banned",
            Self::Unban => "User unbanned",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(MutationError),
}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&MutationError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Shared view of one mutation's latest status.
///
/// Cloning yields another handle onto the same status.
#[derive(Clone, Debug)]
pub struct MutationHandle {
    kind: MutationKind,
    status: Arc<RwLock<MutationStatus>>,
}

impl MutationHandle {
    pub fn new(kind: MutationKind) -> Self {
        Self {
            kind,
            status: Arc::new(RwLock::new(MutationStatus::Idle)),
        }
    }

    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    pub fn status(&self) -> MutationStatus {
        self.status
            .read()
            .map(|status| status.clone())
            .unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        self.status().is_pending()
    }

    pub(crate) fn set(&self, next: MutationStatus) {
        if let Ok(mut status) = self.status.write() {
            *status = next;
        }
    }

    pub(crate) fn settle(&self, result: &Result<(), MutationError>) {
        self.set(match result {
            Ok(()) => MutationStatus::Succeeded,
            Err(err) => MutationStatus::Failed(err.clone()),
        });
    }
}

/// Handles for every directory mutation.
#[derive(Clone, Debug)]
pub struct MutationHandles {
    pub promote: MutationHandle,
    pub demote: MutationHandle,
    pub ban: MutationHandle,
    pub unban: MutationHandle,
}

impl Default for MutationHandles {
    fn default() -> Self {
        Self {
            promote: MutationHandle::new(MutationKind::PromoteToAdmin),
            demote: MutationHandle::new(MutationKind::DemoteFromAdmin),
            ban: MutationHandle::new(MutationKind::Ban),
            unban: MutationHandle::new(MutationKind::Unban),
        }
    }
}

impl MutationHandles {
    pub fn get(&self, kind: MutationKind) -> &MutationHandle {
        match kind {
            MutationKind::PromoteToAdmin => &self.promote,
            MutationKind::DemoteFromAdmin => &self.demote,
            MutationKind::Ban => &self.ban,
            MutationKind::Unban => &self.unban,
        }
    }

    pub fn any_pending(&self) -> bool {
        [&self.promote, &self.demote, &self.ban, &self.unban]
            .iter()
            .any(|handle| handle.is_pending())
    }
}
