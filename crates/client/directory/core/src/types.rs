//! Records exchanged with the remote directory store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque user identifier issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Row of the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Display name, or the username when none is set.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Role tag carried by a role grant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Moderator,
    User,
}

/// Row of the `user_roles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub user_id: UserId,
    pub role: Role,
    pub granted_at: DateTime<Utc>,
}

/// Row of the `user_credits` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBalance {
    pub user_id: UserId,
    pub balance: i64,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `social_accounts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub user_id: UserId,
    pub platform: String,
    pub handle: String,
    pub verified: bool,
}

/// Row of the `wallets` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub user_id: UserId,
    pub chain: String,
    pub address: String,
    pub label: Option<String>,
    pub is_primary: bool,
}

impl Wallet {
    /// Address shortened to `head…tail` for table cells.
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() <= 12 {
            return self.address.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

/// Row of the `user_bans` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRecord {
    pub id: u64,
    pub user_id: UserId,
    pub reason: String,
    pub banned_by: UserId,
    pub banned_at: DateTime<Utc>,
    pub unbanned_at: Option<DateTime<Utc>>,
    pub active: bool,
}

/// Insert payload for a new ban.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBan {
    pub user_id: UserId,
    pub reason: String,
    pub banned_by: UserId,
}

/// Profile filter for directory queries.
///
/// `search` matches case-insensitively as a substring of the username or the
/// display name. Results are ordered newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilter {
    pub search: Option<String>,
}

impl ProfileFilter {
    /// Builds a filter from a raw search box value; blank terms match all.
    pub fn from_term(term: &str) -> Self {
        let trimmed = term.trim();
        Self {
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        let Some(search) = &self.search else {
            return true;
        };
        let needle = search.to_lowercase();
        profile.username.to_lowercase().contains(&needle)
            || profile
                .display_name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
    }
}

/// Secondary collection joined to profiles by user id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SatelliteKind {
    Roles,
    Credits,
    SocialAccounts,
    Wallets,
    Bans,
}

/// Profile merged with its satellite collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub profile: Profile,
    pub roles: Vec<RoleGrant>,
    pub credits: Vec<CreditBalance>,
    pub social_accounts: Vec<SocialAccount>,
    pub wallets: Vec<Wallet>,
    pub ban_info: Option<BanRecord>,
}

impl UserRecord {
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|grant| grant.role == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_banned(&self) -> bool {
        self.ban_info.as_ref().is_some_and(|ban| ban.active)
    }

    pub fn total_credits(&self) -> i64 {
        self.credits.iter().map(|credit| credit.balance).sum()
    }

    pub fn primary_wallet(&self) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|wallet| wallet.is_primary)
            .or_else(|| self.wallets.first())
    }
}

/// Result of one directory fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPage {
    pub users: Vec<UserRecord>,
    /// Satellites whose fetch failed; their fields show as empty or absent.
    pub degraded: Vec<SatelliteKind>,
}

impl DirectoryPage {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, user_id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id() == user_id)
    }

    pub fn summary(&self) -> DirectorySummary {
        DirectorySummary {
            users: self.users.len(),
            admins: self.users.iter().filter(|user| user.is_admin()).count(),
            banned: self.users.iter().filter(|user| user.is_banned()).count(),
            total_credits: self.users.iter().map(UserRecord::total_credits).sum(),
        }
    }
}

/// Aggregate counts shown in the admin header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectorySummary {
    pub users: usize,
    pub admins: usize,
    pub banned: usize,
    pub total_credits: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str, display_name: Option<&str>) -> Profile {
        Profile {
            id: UserId::new(username),
            username: username.to_string(),
            display_name: display_name.map(str::to_string),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn filter_matches_username_or_display_name_case_insensitively() {
        let filter = ProfileFilter::from_term("  ALI ");
        assert_eq!(filter.search.as_deref(), Some("ALI"));
        assert!(filter.matches(&profile("alice", None)));
        assert!(filter.matches(&profile("zed", Some("Kalina"))));
        assert!(!filter.matches(&profile("bob", Some("Robert"))));
    }

    #[test]
    fn blank_term_matches_everything() {
        let filter = ProfileFilter::from_term("   ");
        assert_eq!(filter.search, None);
        assert!(filter.matches(&profile("anyone", None)));
    }

    #[test]
    fn label_falls_back_to_username() {
        assert_eq!(profile("carol", None).label(), "carol");
        assert_eq!(profile("carol", Some(" ")).label(), "carol");
        assert_eq!(profile("carol", Some("Carol D")).label(), "Carol D");
    }

    #[test]
    fn short_address_keeps_head_and_tail() {
        let wallet = Wallet {
            user_id: UserId::new("u"),
            chain: "sol".into(),
            address: "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin".into(),
            label: None,
            is_primary: true,
        };
        assert_eq!(wallet.short_address(), "9xQeWv…VFin");
    }
}
