//! Directory queries and admin mutations.

use std::sync::Arc;

use anyhow::Result;
use client_directory_core::{MutationKind, QueryState, UserId};
use client_frontend_core::view_model::DirectoryView;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, widgets::directory::DirectoryPanel};

impl EventLoop {
    /// Loads the page for the current search term, from cache when fresh.
    pub(in crate::event) async fn refresh_directory(&mut self) {
        let term = self.app_state.search_term.clone();

        self.directory_panel = match self.context.directory.query(&term).await {
            Ok(QueryState::Disabled) => DirectoryPanel::SignedOut,
            Ok(QueryState::Ready { page, from_cache }) => {
                tracing::debug!(search = %term, from_cache, users = page.users.len(), "Directory page ready");
                DirectoryPanel::Ready(DirectoryView::from_page(&page))
            }
            Err(err) => {
                tracing::warn!(search = %term, "Directory query failed: {}", err);
                DirectoryPanel::Failed(err.to_string())
            }
        };

        let len = self.directory_panel.len();
        self.app_state.clamp_directory(len);
    }

    pub(in crate::event) fn highlighted_user(&self) -> Option<UserId> {
        self.directory_panel
            .view()?
            .row(self.app_state.directory_index)
            .map(|row| row.user_id.clone())
    }

    /// Runs `kind` against the highlighted user, then reloads the page.
    ///
    /// The panel is redrawn once the mutation is pending, if it did not
    /// settle on its first poll. Outcomes reach the message panel through
    /// the directory's notifier.
    pub(in crate::event) async fn run_mutation(
        &mut self,
        kind: MutationKind,
        reason: &str,
        terminal: &mut Tui,
    ) -> Result<()> {
        let Some(user_id) = self.highlighted_user() else {
            return Ok(());
        };

        let directory = Arc::clone(&self.context.directory);
        let mutation = async {
            match kind {
                MutationKind::PromoteToAdmin => directory.promote_to_admin(&user_id).await,
                MutationKind::DemoteFromAdmin => directory.demote_from_admin(&user_id).await,
                MutationKind::Ban => directory.ban(&user_id, reason).await,
                MutationKind::Unban => directory.unban(&user_id).await,
            }
        };
        tokio::pin!(mutation);

        let settled = tokio::select! {
            biased;
            result = &mut mutation => Some(result),
            () = tokio::task::yield_now() => None,
        };
        let result = match settled {
            Some(result) => result,
            None => {
                self.render(terminal)?;
                mutation.await
            }
        };

        if result.is_ok() {
            self.refresh_directory().await;
        }
        Ok(())
    }
}
