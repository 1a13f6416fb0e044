//! Data directory storage
//!
//! Directory structure:
//! ~/.clientpage/
//!   config.yaml          # Permissions, latency, keybindings
//!   accounts.yaml        # Fixture account store
//!   clientpage.log

use std::fs;
use std::path::PathBuf;

use super::accounts_data::AccountsData;
use super::config_data::AppConfig;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding config and the account store
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.clientpage/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".clientpage")
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn accounts_path(&self) -> PathBuf {
        self.root.join("accounts.yaml")
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load config.yaml, falling back to defaults when it does not exist
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        AppConfig::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load accounts.yaml, seeding it with sample accounts when missing
    pub fn load_accounts(&self) -> Result<AccountsData, StorageError> {
        let accounts_path = self.accounts_path();
        if !accounts_path.exists() {
            let data = AccountsData::sample();
            self.save_accounts(&data)?;
            tracing::info!(path = %accounts_path.display(), "Seeded sample accounts");
            return Ok(data);
        }

        let content = fs::read_to_string(&accounts_path)
            .map_err(|e| StorageError::Io(format!("Failed to read accounts: {}", e)))?;

        AccountsData::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse accounts: {}", e)))
    }

    pub fn save_accounts(&self, data: &AccountsData) -> Result<(), StorageError> {
        self.init()?;

        let yaml = data
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize accounts: {}", e)))?;

        fs::write(self.accounts_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write accounts: {}", e)))
    }
}
