//! Facade that coordinates profile state, the ledger, and persistence.

use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{Result, TrackerError};
use crate::gamification::avatar;
use crate::ledger::{
    budget_status, delete_transaction, record_transaction, AccountKind, BudgetConfig,
    BudgetStatus, Ledger, NewTransaction, RecordOutcome,
};
use crate::profile::UserProfile;
use crate::storage::StorageBackend;

/// Single-tenant application state over a storage backend.
///
/// All engine computations stay value-passing and pure; this type owns the
/// sequencing (streak before badges) and persists after every mutation.
pub struct Tracker<S: StorageBackend> {
    storage: S,
    profile: Option<UserProfile>,
    ledger: Ledger,
}

impl<S: StorageBackend> Tracker<S> {
    /// Loads both persisted records through the backend.
    pub fn open(storage: S) -> Result<Self> {
        let profile = storage.load_profile()?;
        let ledger = Ledger::from_transactions(storage.load_transactions()?);
        tracing::info!(
            onboarded = profile.is_some(),
            transactions = ledger.len(),
            "tracker opened"
        );
        Ok(Self {
            storage,
            profile,
            ledger,
        })
    }

    pub fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Result<&UserProfile> {
        self.profile
            .as_ref()
            .ok_or(TrackerError::ProfileNotInitialized)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Creates the single per-installation profile.
    pub fn onboard(
        &mut self,
        name: &str,
        email: &str,
        avatar_emoji: &str,
        currency: &str,
        now: DateTime<Utc>,
    ) -> Result<&UserProfile> {
        if self.profile.is_some() {
            return Err(TrackerError::ProfileExists);
        }
        if name.trim().is_empty() {
            return Err(TrackerError::InvalidInput("name must not be empty".into()));
        }
        let profile = UserProfile::new(name, email, avatar_emoji, currency, now);
        self.storage.save_profile(&profile)?;
        self.profile = Some(profile);
        tracing::info!(name, "profile onboarded");
        self.profile()
    }

    /// Inserts a transaction and runs the gamification pipeline, persisting
    /// the updated ledger and profile.
    pub fn record(&mut self, input: NewTransaction, now: DateTime<Utc>) -> Result<RecordOutcome> {
        let profile = self.profile()?.clone();
        let (ledger, profile, outcome) =
            record_transaction(self.ledger.clone(), profile, input, now);
        self.storage.save_transactions(ledger.transactions())?;
        self.storage.save_profile(&profile)?;
        self.ledger = ledger;
        self.profile = Some(profile);
        Ok(outcome)
    }

    /// Removes an entry by id; unknown ids are a benign no-op.
    pub fn delete_transaction(&mut self, id: Uuid) -> Result<()> {
        let ledger = delete_transaction(self.ledger.clone(), id);
        self.storage.save_transactions(ledger.transactions())?;
        self.ledger = ledger;
        Ok(())
    }

    pub fn set_budget(&mut self, budget: BudgetConfig) -> Result<()> {
        let mut profile = self.profile()?.clone();
        profile.budget = budget;
        self.storage.save_profile(&profile)?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Budget consumption for the period containing `now`.
    pub fn budget_status(&self, now: DateTime<Utc>) -> Result<BudgetStatus> {
        let profile = self.profile()?;
        Ok(budget_status(
            &profile.budget,
            self.ledger.transactions(),
            now,
        ))
    }

    /// Switches the selected avatar. Locked avatars are rejected; unknown
    /// ids are a benign no-op.
    pub fn select_avatar(&mut self, id: &str) -> Result<()> {
        let Some(item) = avatar::find(id) else {
            return Ok(());
        };
        let profile = self.profile()?;
        if !avatar::is_unlocked(item, profile) {
            return Err(TrackerError::AvatarLocked(id.to_string()));
        }
        let mut profile = profile.clone();
        profile.avatar = item.emoji.to_string();
        self.storage.save_profile(&profile)?;
        self.profile = Some(profile);
        Ok(())
    }

    pub fn add_account(
        &mut self,
        name: &str,
        kind: AccountKind,
        color: Option<String>,
    ) -> Result<Uuid> {
        if name.trim().is_empty() {
            return Err(TrackerError::InvalidInput(
                "account name must not be empty".into(),
            ));
        }
        let mut profile = self.profile()?.clone();
        let id = profile.add_account(name, kind, color);
        self.storage.save_profile(&profile)?;
        self.profile = Some(profile);
        Ok(id)
    }

    /// Removes an account and detaches any entries still pointing at it.
    /// The last remaining account cannot be removed.
    pub fn remove_account(&mut self, id: Uuid) -> Result<()> {
        let mut profile = self.profile()?.clone();
        profile.remove_account(id)?;
        let mut ledger = self.ledger.clone();
        ledger.detach_account(id);
        self.storage.save_profile(&profile)?;
        self.storage.save_transactions(ledger.transactions())?;
        self.profile = Some(profile);
        self.ledger = ledger;
        Ok(())
    }

    pub fn export_backup(&self, path: &Path) -> Result<()> {
        self.storage.export_backup(path)
    }

    /// Replaces both records from a bundle and reloads in-memory state.
    pub fn import_backup(&mut self, path: &Path) -> Result<()> {
        let (profile, transactions) = self.storage.import_backup(path)?;
        self.profile = Some(profile);
        self.ledger = Ledger::from_transactions(transactions);
        Ok(())
    }

    /// Factory reset: deletes both records and forgets in-memory state.
    pub fn reset(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.profile = None;
        self.ledger = Ledger::new();
        tracing::info!("tracker reset to factory state");
        Ok(())
    }
}
