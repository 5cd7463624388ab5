//! Client-side join of profiles with their satellite collections.

use std::collections::HashMap;

use crate::traits::StoreResult;
use crate::types::{
    BanRecord, CreditBalance, DirectoryPage, Profile, RoleGrant, SatelliteKind, SocialAccount,
    UserId, UserRecord, Wallet,
};

/// Outcome of each satellite query, kept separate so one failure only
/// degrades its own field.
#[derive(Debug, Clone)]
pub struct Satellites {
    pub roles: StoreResult<Vec<RoleGrant>>,
    pub credits: StoreResult<Vec<CreditBalance>>,
    pub social_accounts: StoreResult<Vec<SocialAccount>>,
    pub wallets: StoreResult<Vec<Wallet>>,
    pub bans: StoreResult<Vec<BanRecord>>,
}

impl Default for Satellites {
    fn default() -> Self {
        Self {
            roles: Ok(Vec::new()),
            credits: Ok(Vec::new()),
            social_accounts: Ok(Vec::new()),
            wallets: Ok(Vec::new()),
            bans: Ok(Vec::new()),
        }
    }
}

impl Satellites {
    /// Satellites whose query failed, in declaration order.
    pub fn failed(&self) -> Vec<SatelliteKind> {
        [
            (SatelliteKind::Roles, self.roles.is_err()),
            (SatelliteKind::Credits, self.credits.is_err()),
            (SatelliteKind::SocialAccounts, self.social_accounts.is_err()),
            (SatelliteKind::Wallets, self.wallets.is_err()),
            (SatelliteKind::Bans, self.bans.is_err()),
        ]
        .into_iter()
        .filter_map(|(kind, failed)| failed.then_some(kind))
        .collect()
    }
}

/// Joins `profiles` with `satellites` by user id.
///
/// Output order follows `profiles`. Within a user, rows keep the order their
/// own query returned them in. A failed satellite contributes nothing: empty
/// collections, and `ban_info == None` for bans. Only active bans are
/// considered and the first match wins.
pub fn merge_users(profiles: Vec<Profile>, satellites: Satellites) -> DirectoryPage {
    let degraded = satellites.failed();

    let mut roles = group_by_user(satellites.roles, |grant| &grant.user_id);
    let mut credits = group_by_user(satellites.credits, |credit| &credit.user_id);
    let mut socials = group_by_user(satellites.social_accounts, |account| &account.user_id);
    let mut wallets = group_by_user(satellites.wallets, |wallet| &wallet.user_id);
    let mut bans = group_by_user(
        satellites
            .bans
            .map(|records| records.into_iter().filter(|ban| ban.active).collect()),
        |ban| &ban.user_id,
    );

    let users = profiles
        .into_iter()
        .map(|profile| {
            let id = &profile.id;
            UserRecord {
                roles: roles.remove(id).unwrap_or_default(),
                credits: credits.remove(id).unwrap_or_default(),
                social_accounts: socials.remove(id).unwrap_or_default(),
                wallets: wallets.remove(id).unwrap_or_default(),
                ban_info: bans
                    .remove(id)
                    .and_then(|records| records.into_iter().next()),
                profile,
            }
        })
        .collect();

    DirectoryPage { users, degraded }
}

fn group_by_user<T>(
    rows: StoreResult<Vec<T>>,
    key: impl Fn(&T) -> &UserId,
) -> HashMap<UserId, Vec<T>> {
    let mut grouped: HashMap<UserId, Vec<T>> = HashMap::new();
    for row in rows.unwrap_or_default() {
        grouped.entry(key(&row).clone()).or_default().push(row);
    }
    grouped
}
