//! In-memory DirectoryStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::traits::{
    DirectoryStore, DirectoryWriter, ProfileReader, SatelliteReader, StoreError, StoreResult,
};
use crate::types::{
    BanRecord, CreditBalance, NewBan, Profile, ProfileFilter, Role, RoleGrant, SatelliteKind,
    SocialAccount, UserId, Wallet,
};

/// Table addressed by a store call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Profiles,
    Roles,
    Credits,
    SocialAccounts,
    Wallets,
    Bans,
}

impl From<SatelliteKind> for Table {
    fn from(kind: SatelliteKind) -> Self {
        match kind {
            SatelliteKind::Roles => Self::Roles,
            SatelliteKind::Credits => Self::Credits,
            SatelliteKind::SocialAccounts => Self::SocialAccounts,
            SatelliteKind::Wallets => Self::Wallets,
            SatelliteKind::Bans => Self::Bans,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    profiles: Vec<Profile>,
    roles: Vec<RoleGrant>,
    credits: Vec<CreditBalance>,
    social_accounts: Vec<SocialAccount>,
    wallets: Vec<Wallet>,
    bans: Vec<BanRecord>,
    next_ban_id: u64,
}

#[derive(Debug, Default)]
struct Faults {
    reads: HashMap<Table, StoreError>,
    writes: Option<StoreError>,
}

#[derive(Debug, Default)]
struct Calls {
    reads: HashMap<Table, usize>,
    writes: usize,
}

/// In-memory directory store.
///
/// Rows keep insertion order. Reads and writes can be made to fail per table
/// to exercise degraded fetches, and every call is counted.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryStore {
    tables: RwLock<Tables>,
    faults: RwLock<Faults>,
    calls: RwLock<Calls>,
}

impl InMemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Seeding
    // ------------------------------------------------------------------------

    pub fn insert_profile(&self, profile: Profile) {
        if let Ok(mut tables) = self.tables.write() {
            tables.profiles.push(profile);
        }
    }

    pub fn insert_role(&self, grant: RoleGrant) {
        if let Ok(mut tables) = self.tables.write() {
            tables.roles.push(grant);
        }
    }

    pub fn insert_credit(&self, credit: CreditBalance) {
        if let Ok(mut tables) = self.tables.write() {
            tables.credits.push(credit);
        }
    }

    pub fn insert_social_account(&self, account: SocialAccount) {
        if let Ok(mut tables) = self.tables.write() {
            tables.social_accounts.push(account);
        }
    }

    pub fn insert_wallet(&self, wallet: Wallet) {
        if let Ok(mut tables) = self.tables.write() {
            tables.wallets.push(wallet);
        }
    }

    /// Inserts a ban row as-is, keeping the id counter ahead of it.
    pub fn insert_ban_record(&self, ban: BanRecord) {
        if let Ok(mut tables) = self.tables.write() {
            tables.next_ban_id = tables.next_ban_id.max(ban.id);
            tables.bans.push(ban);
        }
    }

    // ------------------------------------------------------------------------
    // Fault injection
    // ------------------------------------------------------------------------

    /// Makes every read of `table` fail with `error`.
    pub fn fail_reads(&self, table: impl Into<Table>, error: StoreError) {
        if let Ok(mut faults) = self.faults.write() {
            faults.reads.insert(table.into(), error);
        }
    }

    /// Makes every write fail with `error`.
    pub fn fail_writes(&self, error: StoreError) {
        if let Ok(mut faults) = self.faults.write() {
            faults.writes = Some(error);
        }
    }

    pub fn clear_faults(&self) {
        if let Ok(mut faults) = self.faults.write() {
            *faults = Faults::default();
        }
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub fn read_count(&self, table: Table) -> usize {
        self.calls
            .read()
            .map(|calls| calls.reads.get(&table).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Reads of the five satellite tables combined.
    pub fn satellite_read_count(&self) -> usize {
        [
            Table::Roles,
            Table::Credits,
            Table::SocialAccounts,
            Table::Wallets,
            Table::Bans,
        ]
        .into_iter()
        .map(|table| self.read_count(table))
        .sum()
    }

    pub fn write_count(&self) -> usize {
        self.calls.read().map(|calls| calls.writes).unwrap_or(0)
    }

    pub fn roles_of(&self, user_id: &UserId) -> Vec<RoleGrant> {
        self.tables
            .read()
            .map(|tables| scoped(&tables.roles, &[user_id.clone()], |row| &row.user_id))
            .unwrap_or_default()
    }

    pub fn bans_of(&self, user_id: &UserId) -> Vec<BanRecord> {
        self.tables
            .read()
            .map(|tables| scoped(&tables.bans, &[user_id.clone()], |row| &row.user_id))
            .unwrap_or_default()
    }

    fn begin_read(&self, table: Table) -> StoreResult<()> {
        if let Ok(mut calls) = self.calls.write() {
            *calls.reads.entry(table).or_default() += 1;
        }
        let faults = self.faults.read().map_err(|_| poisoned())?;
        match faults.reads.get(&table) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn begin_write(&self) -> StoreResult<()> {
        if let Ok(mut calls) = self.calls.write() {
            calls.writes += 1;
        }
        let faults = self.faults.read().map_err(|_| poisoned())?;
        match &faults.writes {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn read_scoped<T: Clone>(
        &self,
        table: Table,
        user_ids: &[UserId],
        rows: impl Fn(&Tables) -> &Vec<T>,
        key: impl Fn(&T) -> &UserId,
    ) -> StoreResult<Vec<T>> {
        self.begin_read(table)?;
        let tables = self.tables.read().map_err(|_| poisoned())?;
        Ok(scoped(rows(&tables), user_ids, key))
    }
}

fn scoped<T: Clone>(rows: &[T], user_ids: &[UserId], key: impl Fn(&T) -> &UserId) -> Vec<T> {
    rows.iter()
        .filter(|row| user_ids.contains(key(row)))
        .cloned()
        .collect()
}

fn poisoned() -> StoreError {
    StoreError::Backend("in-memory store lock was poisoned".to_string())
}

#[async_trait]
impl ProfileReader for InMemoryDirectoryStore {
    async fn list_profiles(&self, filter: &ProfileFilter) -> StoreResult<Vec<Profile>> {
        self.begin_read(Table::Profiles)?;
        let tables = self.tables.read().map_err(|_| poisoned())?;
        let mut profiles: Vec<Profile> = tables
            .profiles
            .iter()
            .filter(|profile| filter.matches(profile))
            .cloned()
            .collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }
}

#[async_trait]
impl SatelliteReader for InMemoryDirectoryStore {
    async fn list_roles(&self, user_ids: &[UserId]) -> StoreResult<Vec<RoleGrant>> {
        self.read_scoped(Table::Roles, user_ids, |t| &t.roles, |row| &row.user_id)
    }

    async fn list_credits(&self, user_ids: &[UserId]) -> StoreResult<Vec<CreditBalance>> {
        self.read_scoped(Table::Credits, user_ids, |t| &t.credits, |row| &row.user_id)
    }

    async fn list_social_accounts(&self, user_ids: &[UserId]) -> StoreResult<Vec<SocialAccount>> {
        self.read_scoped(
            Table::SocialAccounts,
            user_ids,
            |t| &t.social_accounts,
            |row| &row.user_id,
        )
    }

    async fn list_wallets(&self, user_ids: &[UserId]) -> StoreResult<Vec<Wallet>> {
        self.read_scoped(Table::Wallets, user_ids, |t| &t.wallets, |row| &row.user_id)
    }

    async fn list_active_bans(&self, user_ids: &[UserId]) -> StoreResult<Vec<BanRecord>> {
        let bans = self.read_scoped(Table::Bans, user_ids, |t| &t.bans, |row| &row.user_id)?;
        Ok(bans.into_iter().filter(|ban| ban.active).collect())
    }
}

#[async_trait]
impl DirectoryWriter for InMemoryDirectoryStore {
    async fn upsert_role(&self, grant: RoleGrant) -> StoreResult<()> {
        self.begin_write()?;
        let mut tables = self.tables.write().map_err(|_| poisoned())?;
        let exists = tables
            .roles
            .iter()
            .any(|row| row.user_id == grant.user_id && row.role == grant.role);
        if !exists {
            tables.roles.push(grant);
        }
        Ok(())
    }

    async fn delete_role(&self, user_id: &UserId, role: Role) -> StoreResult<()> {
        self.begin_write()?;
        let mut tables = self.tables.write().map_err(|_| poisoned())?;
        tables
            .roles
            .retain(|row| !(row.user_id == *user_id && row.role == role));
        Ok(())
    }

    async fn insert_ban(&self, ban: NewBan) -> StoreResult<BanRecord> {
        self.begin_write()?;
        let mut tables = self.tables.write().map_err(|_| poisoned())?;
        tables.next_ban_id += 1;
        let record = BanRecord {
            id: tables.next_ban_id,
            user_id: ban.user_id,
            reason: ban.reason,
            banned_by: ban.banned_by,
            banned_at: Utc::now(),
            unbanned_at: None,
            active: true,
        };
        tables.bans.push(record.clone());
        Ok(record)
    }

    async fn deactivate_bans(&self, user_id: &UserId, at: DateTime<Utc>) -> StoreResult<usize> {
        self.begin_write()?;
        let mut tables = self.tables.write().map_err(|_| poisoned())?;
        let mut lifted = 0;
        for ban in tables
            .bans
            .iter_mut()
            .filter(|ban| ban.user_id == *user_id && ban.active)
        {
            ban.active = false;
            ban.unbanned_at = Some(at);
            lifted += 1;
        }
        Ok(lifted)
    }
}

impl DirectoryStore for InMemoryDirectoryStore {
    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn profile(id: &str, age_days: i64) -> Profile {
        Profile {
            id: UserId::new(id),
            username: id.to_string(),
            display_name: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH + Duration::days(1000 - age_days),
        }
    }

    #[tokio::test]
    async fn profiles_are_newest_first() {
        let store = InMemoryDirectoryStore::new();
        store.insert_profile(profile("old", 30));
        store.insert_profile(profile("new", 1));
        store.insert_profile(profile("mid", 10));

        let ids: Vec<_> = store
            .list_profiles(&ProfileFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|profile| profile.id.0)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn upsert_role_is_idempotent() {
        let store = InMemoryDirectoryStore::new();
        let grant = RoleGrant {
            user_id: UserId::new("a"),
            role: Role::Admin,
            granted_at: Utc::now(),
        };

        store.upsert_role(grant.clone()).await.unwrap();
        store.upsert_role(grant).await.unwrap();
        assert_eq!(store.roles_of(&UserId::new("a")).len(), 1);

        store.delete_role(&UserId::new("a"), Role::Admin).await.unwrap();
        store.delete_role(&UserId::new("a"), Role::Admin).await.unwrap();
        assert!(store.roles_of(&UserId::new("a")).is_empty());
        assert_eq!(store.write_count(), 4);
    }

    #[tokio::test]
    async fn injected_read_fault_is_counted_and_returned() {
        let store = InMemoryDirectoryStore::new();
        store.fail_reads(SatelliteKind::Wallets, StoreError::Network("reset".into()));

        let err = store.list_wallets(&[UserId::new("a")]).await.unwrap_err();
        assert_eq!(err, StoreError::Network("reset".into()));
        assert_eq!(store.read_count(Table::Wallets), 1);

        store.clear_faults();
        assert!(store.list_wallets(&[UserId::new("a")]).await.is_ok());
    }
}
