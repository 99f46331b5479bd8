//! Locally persisted session: the current-user record and bearer credential.
//!
//! Two fixed files under the session directory, one per record:
//!
//!   <dir>/user.toml   — the current-user record
//!   <dir>/token.toml  — the credential (owner-only on unix)
//!
//! Both are plain text; no encryption, no expiry enforced here.

use crate::error::{RdvError, RdvResult};
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct TokenRecord {
    token: String,
}

/// Explicit session context with read/write/clear operations.
///
/// The backing directory is injectable so tests can run against a temp dir.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Session store at the platform config location (~/.config/rdv/session).
    pub fn open_default() -> RdvResult<SessionStore> {
        let dir = dirs::config_dir()
            .ok_or_else(|| RdvError::Config("Could not determine config directory".into()))?
            .join("rdv")
            .join("session");

        Ok(SessionStore { dir })
    }

    /// Session store backed by an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> SessionStore {
        SessionStore { dir: dir.into() }
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join("user.toml")
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join("token.toml")
    }

    /// Synchronous read of the current-user record; `None` when
    /// unauthenticated.
    pub fn current_user(&self) -> RdvResult<Option<User>> {
        read_record(&self.user_path())
    }

    /// Overwrites any previous record.
    pub fn set_current_user(&self, user: &User) -> RdvResult<()> {
        write_record(&self.user_path(), user, false)
    }

    pub fn token(&self) -> RdvResult<Option<String>> {
        Ok(read_record::<TokenRecord>(&self.token_path())?.map(|r| r.token))
    }

    pub fn set_token(&self, token: &str) -> RdvResult<()> {
        let record = TokenRecord {
            token: token.to_string(),
        };
        write_record(&self.token_path(), &record, true)
    }

    /// Remove both records (logout). Missing files are not an error.
    pub fn clear(&self) -> RdvResult<()> {
        for path in [self.user_path(), self.token_path()] {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> RdvResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)?;
    let record = toml::from_str(&contents)
        .map_err(|e| RdvError::Serialization(format!("{}: {}", path.display(), e)))?;

    Ok(Some(record))
}

fn write_record<T: Serialize>(path: &Path, record: &T, sensitive: bool) -> RdvResult<()> {
    let contents =
        toml::to_string_pretty(record).map_err(|e| RdvError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;

    if sensitive {
        // Owner-only (0600) since the file holds the bearer credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }
    }

    Ok(())
}
