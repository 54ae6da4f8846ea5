use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, TrackerError};
use crate::ledger::{Account, AccountKind, BudgetConfig};

/// The single per-installation user profile.
///
/// Owns the budget configuration and the account list by value. Points only
/// ever grow, badges are never revoked, and `longest_streak` never drops
/// below `current_streak`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Selected avatar emoji.
    pub avatar: String,
    pub joined_date: DateTime<Utc>,
    pub points: u64,
    pub badges: BTreeSet<String>,
    /// Display-only currency code; engine math ignores it.
    pub currency: String,
    pub budget: BudgetConfig,
    pub accounts: Vec<Account>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_transaction_date: Option<DateTime<Utc>>,
    pub has_completed_tour: bool,
}

impl UserProfile {
    /// Creates the onboarding profile with the generated default account
    /// pair. New profiles have not seen the tour yet.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
        currency: impl Into<String>,
        joined: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
            joined_date: joined,
            points: 0,
            badges: BTreeSet::new(),
            currency: currency.into(),
            budget: BudgetConfig::default(),
            accounts: Account::default_pair(),
            current_streak: 0,
            longest_streak: 0,
            last_transaction_date: None,
            has_completed_tour: false,
        }
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        kind: AccountKind,
        color: Option<String>,
    ) -> Uuid {
        let mut account = Account::new(name, kind);
        account.color = color;
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// Removes an account. The last remaining account cannot be removed;
    /// unknown ids are a benign no-op.
    pub fn remove_account(&mut self, id: Uuid) -> Result<()> {
        let Some(position) = self.accounts.iter().position(|a| a.id == id) else {
            return Ok(());
        };
        if self.accounts.len() == 1 {
            return Err(TrackerError::LastAccount);
        }
        let removed = self.accounts.remove(position);
        tracing::info!(account = %removed.name, "account removed");
        Ok(())
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.contains(id)
    }
}
