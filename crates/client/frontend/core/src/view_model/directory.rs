//! Directory rows for admin list rendering.

use client_directory_core::{DirectoryPage, DirectorySummary, Role, UserId, UserRecord};

/// One user as the admin list shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryRow {
    pub user_id: UserId,
    pub name: String,
    pub username: String,
    pub roles: Vec<Role>,
    pub credits: i64,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub wallet: Option<String>,
    /// Verified social handles, `platform:handle`.
    pub socials: Vec<String>,
}

impl DirectoryRow {
    pub fn from_record(record: &UserRecord) -> Self {
        let mut roles: Vec<Role> = Vec::with_capacity(record.roles.len());
        for grant in &record.roles {
            if !roles.contains(&grant.role) {
                roles.push(grant.role);
            }
        }

        Self {
            user_id: record.id().clone(),
            name: record.profile.label().to_string(),
            username: record.profile.username.clone(),
            roles,
            credits: record.total_credits(),
            banned: record.is_banned(),
            ban_reason: record.ban_info.as_ref().map(|ban| ban.reason.clone()),
            wallet: record.primary_wallet().map(|wallet| wallet.short_address()),
            socials: record
                .social_accounts
                .iter()
                .filter(|account| account.verified)
                .map(|account| format!("{}:{}", account.platform, account.handle))
                .collect(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Comma-separated role badges, or `-` when the user holds none.
    pub fn role_badges(&self) -> String {
        if self.roles.is_empty() {
            return "-".to_string();
        }
        self.roles
            .iter()
            .map(|role| role.as_ref())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Rows plus header figures for one directory page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryView {
    pub rows: Vec<DirectoryRow>,
    pub summary: DirectorySummary,
    /// Satellite names that failed to load for this page.
    pub degraded: Vec<String>,
}

impl DirectoryView {
    pub fn from_page(page: &DirectoryPage) -> Self {
        Self {
            rows: page.users.iter().map(DirectoryRow::from_record).collect(),
            summary: page.summary(),
            degraded: page.degraded.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&DirectoryRow> {
        self.rows.get(index)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use client_directory_core::{
        BanRecord, CreditBalance, Profile, RoleGrant, SatelliteKind, SocialAccount, Wallet,
    };

    use super::*;

    fn record() -> UserRecord {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let id = UserId::new("u1");
        UserRecord {
            profile: Profile {
                id: id.clone(),
                username: "alice".into(),
                display_name: None,
                created_at: at,
            },
            roles: vec![RoleGrant {
                user_id: id.clone(),
                role: Role::Admin,
                granted_at: at,
            }],
            credits: vec![
                CreditBalance { user_id: id.clone(), balance: 40, updated_at: at },
                CreditBalance { user_id: id.clone(), balance: 2, updated_at: at },
            ],
            social_accounts: vec![
                SocialAccount {
                    user_id: id.clone(),
                    platform: "github".into(),
                    handle: "alice".into(),
                    verified: true,
                },
                SocialAccount {
                    user_id: id.clone(),
                    platform: "x".into(),
                    handle: "al".into(),
                    verified: false,
                },
            ],
            wallets: vec![Wallet {
                user_id: id.clone(),
                chain: "sui".into(),
                address: "0x1234567890abcdef".into(),
                label: None,
                is_primary: true,
            }],
            ban_info: Some(BanRecord {
                id: 7,
                user_id: id,
                reason: "spam".into(),
                banned_by: UserId::new("mod"),
                banned_at: at,
                unbanned_at: None,
                active: true,
            }),
        }
    }

    #[test]
    fn row_flattens_record() {
        let row = DirectoryRow::from_record(&record());

        assert_eq!(row.name, "alice");
        assert!(row.is_admin());
        assert_eq!(row.role_badges(), "admin");
        assert_eq!(row.credits, 42);
        assert!(row.banned);
        assert_eq!(row.ban_reason.as_deref(), Some("spam"));
        assert!(row.wallet.is_some());
        assert_eq!(row.socials, vec!["github:alice".to_string()]);
    }

    #[test]
    fn repeated_roles_show_once_in_grant_order() {
        let mut record = record();
        let grant = |role| RoleGrant {
            user_id: record.profile.id.clone(),
            role,
            granted_at: record.profile.created_at,
        };
        let extra = [grant(Role::Moderator), grant(Role::Admin), grant(Role::Moderator)];
        record.roles.extend(extra);

        let row = DirectoryRow::from_record(&record);
        assert_eq!(row.roles, vec![Role::Admin, Role::Moderator]);
        assert_eq!(row.role_badges(), "admin,moderator");
    }

    #[test]
    fn view_reports_degraded_satellites() {
        let page = DirectoryPage {
            users: vec![record()],
            degraded: vec![SatelliteKind::Wallets],
        };
        let view = DirectoryView::from_page(&page);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.summary.admins, 1);
        assert_eq!(view.degraded, vec!["wallets".to_string()]);
    }
}
