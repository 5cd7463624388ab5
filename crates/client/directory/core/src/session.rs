//! Fixed caller identity.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::traits::{Session, SessionProvider};
use crate::types::UserId;

/// Session provider holding a caller set by the host application.
///
/// Sign-in and sign-out happen outside this crate; the host calls
/// [`StaticSession::sign_in`] / [`StaticSession::sign_out`] to mirror them.
#[derive(Debug, Default)]
pub struct StaticSession {
    session: RwLock<Option<Session>>,
}

impl StaticSession {
    pub fn signed_in(user_id: impl Into<UserId>) -> Self {
        Self {
            session: RwLock::new(Some(Session::new(user_id))),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user_id: impl Into<UserId>) {
        if let Ok(mut session) = self.session.write() {
            *session = Some(Session::new(user_id));
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut session) = self.session.write() {
            *session = None;
        }
    }

    fn snapshot(&self) -> Option<Session> {
        self.session.read().ok().and_then(|session| session.clone())
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn current_session(&self) -> Option<Session> {
        self.snapshot()
    }

    fn known_user(&self) -> Option<UserId> {
        self.snapshot().map(|session| session.user_id)
    }
}
