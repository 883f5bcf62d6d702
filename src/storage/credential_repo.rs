use crate::domain::credential::OAuthCredential;
use crate::domain::identity::IdentityToken;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const RECORD_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no stored credential for identity")]
    NotFound,
    #[error("stored credential is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode credential: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("credential storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed credential store: one `<identity>.json` record per identity.
///
/// Writes go to a uniquely named temp file that is renamed over the record, so
/// readers never observe a partial record. Concurrent writers for the same
/// identity are not ordered; whichever rename lands last wins.
#[derive(Clone, Debug)]
pub struct CredentialRepository {
    dir: PathBuf,
}

impl CredentialRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, identity: &IdentityToken) -> PathBuf {
        self.dir.join(format!("{identity}.{RECORD_EXTENSION}"))
    }

    /// Creates the storage directory if it does not exist yet.
    ///
    /// # Errors
    /// Returns `CredentialError::Io` if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), CredentialError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Replaces the stored credential for `identity`.
    ///
    /// # Errors
    /// Returns `CredentialError::Io` if the record cannot be written.
    #[tracing::instrument(err, skip(self, identity, credential), fields(identity = %identity))]
    pub async fn put(&self, identity: &IdentityToken, credential: &OAuthCredential) -> Result<(), CredentialError> {
        let content = serde_json::to_vec_pretty(credential).map_err(CredentialError::Encode)?;
        self.ensure_dir().await?;

        let target = self.path_for(identity);
        let temp = self.dir.join(format!(".{identity}.{}.tmp", Uuid::new_v4().simple()));

        if let Err(e) = write_private(&temp, &content).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp, &target).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %target.display(), "Credential stored");
        Ok(())
    }

    /// Loads the stored credential for `identity`. Expiry is not checked.
    ///
    /// # Errors
    /// Returns `NotFound` when no record exists and `Malformed` when the record cannot be parsed.
    #[tracing::instrument(err(level = "debug"), skip(self, identity), fields(identity = %identity))]
    pub async fn get(&self, identity: &IdentityToken) -> Result<OAuthCredential, CredentialError> {
        let bytes = match fs::read(self.path_for(identity)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(CredentialError::NotFound),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(CredentialError::Malformed)
    }

    /// Checks that the storage directory is present.
    ///
    /// # Errors
    /// Returns a string describing the failure if the directory is missing or unreadable.
    pub async fn check(&self) -> Result<(), String> {
        match fs::metadata(&self.dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(format!("{} is not a directory", self.dir.display())),
            Err(e) => Err(format!("Credential directory {} unavailable: {e}", self.dir.display())),
        }
    }
}

/// Writes `content` to a new file that is owner-only from the moment it exists.
async fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    Ok(())
}
