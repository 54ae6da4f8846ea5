use std::collections::BTreeSet;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};
use crate::ledger::{Account, BudgetConfig, Transaction};
use crate::profile::UserProfile;
use crate::utils::{
    app_data_dir, backups_dir_in, ensure_dir, transactions_file_in, user_file_in,
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// File-backed storage: one JSON document per record, written atomically
/// via a temp file and rename.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    user_file: PathBuf,
    transactions_file: PathBuf,
    backups_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            user_file: user_file_in(&root),
            transactions_file: transactions_file_in(&root),
            backups_dir: backups_dir_in(&root),
            root,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// Default location for a timestamped bundle inside the managed backup
    /// directory.
    pub fn backup_path(&self, now: DateTime<Utc>) -> PathBuf {
        self.backups_dir
            .join(format!("backup_{}.json", now.format("%Y%m%d_%H%M%S")))
    }
}

impl StorageBackend for JsonStorage {
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        if !self.user_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.user_file)?;
        let raw: RawProfile = serde_json::from_str(&data)?;
        Ok(Some(raw.upgrade()))
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        write_atomic(&self.user_file, &json)
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        if !self.transactions_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.transactions_file)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string_pretty(transactions)?;
        write_atomic(&self.transactions_file, &json)
    }

    fn clear(&self) -> Result<()> {
        for path in [&self.user_file, &self.transactions_file] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        tracing::info!("persisted records cleared");
        Ok(())
    }

    fn export_backup(&self, path: &Path) -> Result<()> {
        let Some(user) = self.load_profile()? else {
            return Err(TrackerError::ProfileNotInitialized);
        };
        let bundle = BackupBundle {
            version: BACKUP_SCHEMA_VERSION,
            export_date: Utc::now(),
            user,
            transactions: self.load_transactions()?,
        };
        let json = serde_json::to_string_pretty(&bundle)?;
        write_atomic(path, &json)?;
        tracing::info!(path = %path.display(), "backup exported");
        Ok(())
    }

    /// Validates and applies a bundle, replacing both records.
    ///
    /// Validation runs entirely before the first write, so a rejected bundle
    /// leaves the persisted state untouched.
    fn import_backup(&self, path: &Path) -> Result<(UserProfile, Vec<Transaction>)> {
        let data = fs::read_to_string(path)?;
        let raw: RawBundle = serde_json::from_str(&data)
            .map_err(|err| TrackerError::InvalidBackup(err.to_string()))?;

        let Some(user) = raw.user else {
            return Err(TrackerError::InvalidBackup("missing `user` record".into()));
        };
        let Some(transactions) = raw.transactions else {
            return Err(TrackerError::InvalidBackup(
                "missing `transactions` record".into(),
            ));
        };
        if user.name.trim().is_empty() {
            return Err(TrackerError::InvalidBackup("user name is empty".into()));
        }
        if user.currency.as_deref().unwrap_or("").trim().is_empty() {
            return Err(TrackerError::InvalidBackup("user currency is empty".into()));
        }

        let profile = user.upgrade();
        self.save_profile(&profile)?;
        self.save_transactions(&transactions)?;
        tracing::info!(path = %path.display(), "backup imported");
        Ok((profile, transactions))
    }
}

/// Self-contained export of both persisted records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupBundle {
    pub version: u32,
    pub export_date: DateTime<Utc>,
    pub user: UserProfile,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
struct RawBundle {
    #[serde(default)]
    user: Option<RawProfile>,
    #[serde(default)]
    transactions: Option<Vec<Transaction>>,
}

/// Profile record as written by any past schema. Evolution-prone fields are
/// optional here; `upgrade` maps every older shape onto the current one.
#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    avatar: String,
    #[serde(default)]
    joined_date: Option<DateTime<Utc>>,
    #[serde(default)]
    points: u64,
    #[serde(default)]
    badges: BTreeSet<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    budget: Option<BudgetConfig>,
    #[serde(default)]
    accounts: Option<Vec<Account>>,
    #[serde(default)]
    current_streak: u32,
    #[serde(default)]
    longest_streak: u32,
    #[serde(default)]
    last_transaction_date: Option<DateTime<Utc>>,
    #[serde(default)]
    has_completed_tour: Option<bool>,
}

impl RawProfile {
    /// Deterministic upgrade to the current shape.
    ///
    /// Records that predate the tour flag belong to established users, so
    /// the flag defaults to true; brand-new profiles start at false via
    /// `UserProfile::new`.
    fn upgrade(self) -> UserProfile {
        let accounts = match self.accounts {
            Some(accounts) if !accounts.is_empty() => accounts,
            _ => Account::default_pair(),
        };
        let current_streak = self.current_streak;
        UserProfile {
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            joined_date: self.joined_date.unwrap_or_else(Utc::now),
            points: self.points,
            badges: self.badges,
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            budget: self.budget.unwrap_or_default(),
            accounts,
            current_streak,
            longest_streak: self.longest_streak.max(current_streak),
            last_transaction_date: self.last_transaction_date,
            has_completed_tour: self.has_completed_tour.unwrap_or(true),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_profile() -> UserProfile {
        UserProfile::new("Ada", "ada@example.com", "🦊", "EUR", Utc::now())
    }

    #[test]
    fn profile_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let profile = sample_profile();
        storage.save_profile(&profile).expect("save profile");
        let loaded = storage.load_profile().expect("load profile").unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn missing_records_load_as_empty_state() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load_profile().unwrap().is_none());
        assert!(storage.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn sparse_profile_record_gets_documented_defaults() {
        let (storage, guard) = storage_with_temp_dir();
        fs::write(
            user_file_in(guard.path()),
            r#"{"name": "Grace", "avatar": "🐼"}"#,
        )
        .unwrap();
        let loaded = storage.load_profile().unwrap().unwrap();
        assert_eq!(loaded.currency, "USD");
        assert_eq!(loaded.current_streak, 0);
        assert_eq!(loaded.longest_streak, 0);
        assert!(loaded.last_transaction_date.is_none());
        assert_eq!(loaded.budget, BudgetConfig::default());
        assert_eq!(loaded.accounts.len(), 2);
        // Pre-existing records without the flag skip the tour.
        assert!(loaded.has_completed_tour);
    }

    #[test]
    fn import_rejects_bundle_without_transactions() {
        let (storage, guard) = storage_with_temp_dir();
        let bundle_path = guard.path().join("bundle.json");
        fs::write(
            &bundle_path,
            r#"{"version": 1, "user": {"name": "Ada", "currency": "USD"}}"#,
        )
        .unwrap();
        let err = storage.import_backup(&bundle_path).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidBackup(_)));
        // Rejection must not have touched the records.
        assert!(storage.load_profile().unwrap().is_none());
    }

    #[test]
    fn import_rejects_empty_name_without_partial_write() {
        let (storage, guard) = storage_with_temp_dir();
        let bundle_path = guard.path().join("bundle.json");
        fs::write(
            &bundle_path,
            r#"{"version": 1, "user": {"name": "  ", "currency": "USD"}, "transactions": []}"#,
        )
        .unwrap();
        assert!(storage.import_backup(&bundle_path).is_err());
        assert!(storage.load_profile().unwrap().is_none());
        assert!(storage.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn export_then_import_restores_both_records() {
        let (storage, guard) = storage_with_temp_dir();
        let profile = sample_profile();
        storage.save_profile(&profile).unwrap();
        storage.save_transactions(&[]).unwrap();

        let bundle_path = guard.path().join("bundle.json");
        storage.export_backup(&bundle_path).unwrap();

        storage.clear().unwrap();
        assert!(storage.load_profile().unwrap().is_none());

        let (restored, transactions) = storage.import_backup(&bundle_path).unwrap();
        assert_eq!(restored.name, "Ada");
        assert_eq!(restored.currency, "EUR");
        assert!(transactions.is_empty());
    }

    #[test]
    fn clear_removes_both_records() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save_profile(&sample_profile()).unwrap();
        storage.save_transactions(&[]).unwrap();
        storage.clear().unwrap();
        assert!(storage.load_profile().unwrap().is_none());
        assert!(storage.load_transactions().unwrap().is_empty());
    }
}
