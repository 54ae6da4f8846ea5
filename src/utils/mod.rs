use std::{
    env,
    path::{Path, PathBuf},
    sync::Once,
};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".tracker_core";
const USER_FILE: &str = "user.json";
const TRANSACTIONS_FILE: &str = "transactions.json";
const BACKUP_DIR: &str = "backups";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tracker_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.tracker_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TRACKER_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted user profile record inside `base`.
pub fn user_file_in(base: &Path) -> PathBuf {
    base.join(USER_FILE)
}

/// Path of the persisted transaction list record inside `base`.
pub fn transactions_file_in(base: &Path) -> PathBuf {
    base.join(TRANSACTIONS_FILE)
}

/// Directory holding exported backup bundles inside `base`.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Creates `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
