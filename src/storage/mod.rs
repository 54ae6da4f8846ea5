pub mod json_backend;

use std::path::Path;

use crate::errors::Result;
use crate::ledger::Transaction;
use crate::profile::UserProfile;

/// Abstraction over persistence backends holding the two persisted records:
/// the user profile and the transaction list.
///
/// Reads and writes are synchronous and immediately consistent; the engine
/// never retries.
pub trait StorageBackend: Send + Sync {
    /// Loads the profile record, `None` before onboarding.
    fn load_profile(&self) -> Result<Option<UserProfile>>;
    fn save_profile(&self, profile: &UserProfile) -> Result<()>;
    /// Loads the transaction record, empty before the first entry.
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
    /// Factory reset: removes both records.
    fn clear(&self) -> Result<()>;
    /// Writes a self-contained bundle of both records to `path`.
    fn export_backup(&self, path: &Path) -> Result<()>;
    /// Validates and applies a bundle, replacing both records. Validation
    /// failure aborts with no partial write.
    fn import_backup(&self, path: &Path) -> Result<(UserProfile, Vec<Transaction>)>;
}

pub use json_backend::{BackupBundle, JsonStorage, BACKUP_SCHEMA_VERSION};
