//! JSON file credential store.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use snippetlog_core::{CredentialKey, CredentialStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Credentials file name inside the store directory.
const CREDENTIALS_FILE: &str = "credentials.json";

/// Lock file guarding concurrent writers.
const LOCK_FILE: &str = "credentials.lock";

/// On-disk layout: flat string entries keyed by name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_email: Option<String>,
}

impl StoredCredentials {
    fn slot(&mut self, key: CredentialKey) -> &mut Option<String> {
        match key {
            CredentialKey::AccessToken => &mut self.access_token,
            CredentialKey::RefreshToken => &mut self.refresh_token,
            CredentialKey::UserEmail => &mut self.user_email,
        }
    }

    fn get(&self, key: CredentialKey) -> Option<&String> {
        match key {
            CredentialKey::AccessToken => self.access_token.as_ref(),
            CredentialKey::RefreshToken => self.refresh_token.as_ref(),
            CredentialKey::UserEmail => self.user_email.as_ref(),
        }
    }

    fn is_empty(&self) -> bool {
        CredentialKey::ALL.iter().all(|key| self.get(*key).is_none())
    }
}

/// A [`CredentialStore`] persisted as `credentials.json` in a directory.
///
/// The file is read once when the store is opened; afterwards the in-memory
/// copy is authoritative and every write is flushed through to disk. If the
/// directory cannot be read or written the store keeps working in memory
/// and logs a warning, so a broken disk never takes the session down.
#[derive(Debug)]
pub struct FileCredentialStore {
    dir: PathBuf,
    entries: RwLock<StoredCredentials>,
}

impl FileCredentialStore {
    /// Open (or lazily create) the store in `dir`.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let entries = match Self::load(&dir.join(CREDENTIALS_FILE)) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Failed to read credentials, starting empty");
                StoredCredentials::default()
            }
        };

        debug!(empty = entries.is_empty(), "Opened credential store");

        Self {
            dir,
            entries: RwLock::new(entries),
        }
    }

    /// Returns the directory this store persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the credentials file path.
    pub fn path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE)
    }

    fn load(path: &Path) -> io::Result<StoredCredentials> {
        if !path.exists() {
            return Ok(StoredCredentials::default());
        }
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn update(&self, key: CredentialKey, value: Option<&str>) {
        let snapshot = {
            let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
            *entries.slot(key) = value.map(str::to_string);
            entries.clone()
        };

        if let Err(e) = self.persist(&snapshot) {
            warn!(
                error = %e,
                key = %key,
                path = %self.path().display(),
                "Failed to persist credentials, keeping them in memory"
            );
        }
    }

    fn persist(&self, entries: &StoredCredentials) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.dir.join(LOCK_FILE))?;
        lock_file.lock_exclusive()?;

        let result = self.write_locked(entries);

        lock_file.unlock()?;
        result
    }

    fn write_locked(&self, entries: &StoredCredentials) -> io::Result<()> {
        let path = self.path();

        if entries.is_empty() {
            if path.exists() {
                fs::remove_file(&path)?;
            }
            return Ok(());
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = path.with_extension("json.tmp");

        let mut file = File::create(&tmp)?;

        // Set restrictive permissions before any secret hits the disk (Unix only)
        #[cfg(unix)]
        {
            let mut perms = file.metadata()?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&tmp, perms)?;
        }

        file.write_all(json.as_bytes())?;
        file.sync_data()?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: CredentialKey, value: &str) {
        self.update(key, Some(value));
    }

    fn remove(&self, key: CredentialKey) {
        self.update(key, None);
    }
}
