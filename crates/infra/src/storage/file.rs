//! File-backed credential store
//!
//! The file is a flat JSON object. The token lives under
//! [`AUTH_TOKEN_KEY`]; other keys written by the embedding application are
//! preserved. Writes go to a sibling temp file and are renamed into place.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use atrium_core::CredentialStore;
use atrium_domain::{Result, AUTH_TOKEN_KEY};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::errors::InfraError;

type Entries = BTreeMap<String, Value>;

/// Persists the token in a JSON key/value file
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Entries::new());
        }

        Ok(serde_json::from_slice(&bytes).map_err(InfraError::from)?)
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let data = serde_json::to_vec_pretty(entries).map_err(InfraError::from)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, data).map_err(InfraError::from)?;
        fs::rename(&temp_path, &self.path).map_err(InfraError::from)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries.get(AUTH_TOKEN_KEY).and_then(Value::as_str).map(str::to_string))
    }

    fn store(&self, token: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "token written");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        if entries.remove(AUTH_TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "token removed");
        Ok(())
    }
}

impl std::fmt::Debug for FileCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentialStore").field("path", &self.path).finish()
    }
}
