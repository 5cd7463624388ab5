//! Seeded in-memory directory and board used by the binary.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use board_core::{
    AnimationEvent, AnimationKind, BoardSnapshot, BoardUiState, Cell, Grid, GridError, TileKind,
};
use chrono::{DateTime, Duration, Utc};
use client_directory_core::{
    BanRecord, CreditBalance, DirectoryConfig, InMemoryDirectoryStore, NotificationSink, Profile,
    Role, RoleGrant, SocialAccount, StaticSession, UserDirectory, UserId, Wallet,
};

/// Caller used when `DIRECTORY_CALLER_ID` is unset.
pub const DEMO_CALLER: &str = "u-ada";

/// Builds a directory over a seeded in-memory store.
pub fn build_directory(
    mut config: DirectoryConfig,
    notifier: Arc<dyn NotificationSink>,
) -> Arc<UserDirectory> {
    let caller = config
        .caller_id
        .get_or_insert_with(|| UserId::new(DEMO_CALLER))
        .clone();

    let store = Arc::new(seeded_store(Utc::now()));
    let session = Arc::new(StaticSession::signed_in(caller));

    Arc::new(UserDirectory::new(store, session, notifier).with_config(config))
}

/// Store with a handful of users covering every satellite.
pub fn seeded_store(now: DateTime<Utc>) -> InMemoryDirectoryStore {
    let store = InMemoryDirectoryStore::new();

    let users = [
        ("u-ada", "ada", Some("Ada Lovelace"), 40),
        ("u-grace", "grace", Some("Grace Hopper"), 32),
        ("u-linus", "linus", None, 21),
        ("u-mallory", "mallory", Some("Mallory"), 9),
        ("u-barbara", "barbara", Some("Barbara Liskov"), 3),
    ];

    for (id, username, display_name, days_ago) in users {
        store.insert_profile(Profile {
            id: UserId::new(id),
            username: username.to_string(),
            display_name: display_name.map(str::to_string),
            created_at: now - Duration::days(days_ago),
        });
    }

    for (id, role) in [("u-ada", Role::Admin), ("u-grace", Role::Moderator)] {
        store.insert_role(RoleGrant {
            user_id: UserId::new(id),
            role,
            granted_at: now,
        });
    }

    for (id, balance) in [("u-ada", 1200), ("u-grace", 450), ("u-linus", 75), ("u-barbara", 10)] {
        store.insert_credit(CreditBalance {
            user_id: UserId::new(id),
            balance,
            updated_at: now,
        });
    }

    for (id, platform, handle, verified) in [
        ("u-ada", "github", "ada", true),
        ("u-linus", "github", "torvalds", true),
        ("u-mallory", "x", "mallory_x", false),
    ] {
        store.insert_social_account(SocialAccount {
            user_id: UserId::new(id),
            platform: platform.to_string(),
            handle: handle.to_string(),
            verified,
        });
    }

    for (id, chain, address, is_primary) in [
        ("u-ada", "sui", "0x7a1f3c9e0b4d2a68f5e1c3b7d9a0e2f4", true),
        ("u-grace", "ethereum", "0x52908400098527886E0F7030069857D2E4169EE7", true),
        ("u-grace", "sui", "0x0b4d2a68f5e1c3b7d9a0e2f47a1f3c9e", false),
    ] {
        store.insert_wallet(Wallet {
            user_id: UserId::new(id),
            chain: chain.to_string(),
            address: address.to_string(),
            label: None,
            is_primary,
        });
    }

    store.insert_ban_record(BanRecord {
        id: 1,
        user_id: UserId::new("u-mallory"),
        reason: "Spam".to_string(),
        banned_by: UserId::new("u-grace"),
        banned_at: now - Duration::days(2),
        unbanned_at: None,
        active: true,
    });

    store
}

/// Board shown when no snapshot file is configured.
pub fn demo_board() -> Result<BoardSnapshot, GridError> {
    use TileKind::*;

    let grid = Grid::new(vec![
        vec![Red, Blue, Green, Yellow, Purple, Orange, Red],
        vec![Blue, Blocked, LineRow, Green, Green, Blocked, Yellow],
        vec![Green, Yellow, Bomb, Red, Empty, Purple, Blue],
        vec![Purple, Orange, Red, Rainbow, Blue, LineColumn, Green],
        vec![Yellow, Red, Blue, Green, LineCross, Orange, Purple],
        vec![Orange, Green, Purple, Blue, Red, Yellow, Empty],
    ])?;

    let mut ui = BoardUiState::new()
        .with_selected(Cell::new(0, 0))
        .with_hints([Cell::new(1, 3), Cell::new(1, 4)]);
    ui.push_animation(AnimationEvent::new(1, AnimationKind::Invalid, [Cell::new(2, 3)]));
    ui.push_animation(AnimationEvent::new(
        2,
        AnimationKind::Match,
        [Cell::new(2, 3), Cell::new(3, 3)],
    ));
    ui.push_animation(AnimationEvent::new(3, AnimationKind::Drop, [Cell::new(0, 6)]));

    let snapshot = BoardSnapshot::new(grid, ui);
    snapshot.validate()?;
    Ok(snapshot)
}

/// Reads a JSON board snapshot and checks its coordinates.
pub fn load_board(path: &Path) -> Result<BoardSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading board file {}", path.display()))?;
    let snapshot: BoardSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing board file {}", path.display()))?;
    snapshot
        .validate()
        .with_context(|| format!("validating board file {}", path.display()))?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_board_is_valid() {
        let board = demo_board().expect("demo board");
        let grid = board.grid.as_ref().expect("grid present");
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.width(), 7);
    }

    #[test]
    fn seeded_store_has_every_satellite() {
        let store = seeded_store(Utc::now());
        assert_eq!(store.roles_of(&UserId::new("u-ada")).len(), 1);
        assert_eq!(store.bans_of(&UserId::new("u-mallory")).len(), 1);
    }
}
