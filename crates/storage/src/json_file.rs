//! JSON files
//!
//! Every collection is a JSON object keyed by user ID, stored as `<key>.json` in the data
//! directory. A missing file is an empty collection.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use liftplan_domain as domain;
use log::{debug, error};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

const KEY_PROFILES: &str = "profiles";
const KEY_RECOVERY: &str = "recovery";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid data in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<Error> for domain::StorageError {
    fn from(value: Error) -> Self {
        domain::StorageError::Other(Box::new(value))
    }
}

pub struct JsonFile {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn read<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<BTreeMap<domain::UserID, T>, Error> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| Error::Json { path, source })
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist", path.display());
                Ok(BTreeMap::new())
            }
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    async fn write<T: Serialize>(
        &self,
        key: &str,
        entries: &BTreeMap<domain::UserID, T>,
    ) -> Result<(), Error> {
        let path = self.path(key);
        let json = serde_json::to_vec_pretty(entries).map_err(|source| Error::Json {
            path: path.clone(),
            source,
        })?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| Error::Io {
                path: self.dir.clone(),
                source,
            })?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|source| Error::Io {
                path: tmp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|source| Error::Io { path, source })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
        user_id: domain::UserID,
    ) -> Result<Option<T>, domain::ReadError> {
        let mut entries = self.read::<T>(key).await.map_err(|err| {
            error!("failed to read {key}: {err}");
            domain::StorageError::from(err)
        })?;
        Ok(entries.remove(&user_id))
    }

    async fn put<T: Serialize + DeserializeOwned + Clone>(
        &self,
        key: &str,
        user_id: domain::UserID,
        value: T,
    ) -> Result<T, domain::UpdateError> {
        let _guard = self.lock.lock().await;
        let mut entries = self
            .read::<T>(key)
            .await
            .map_err(domain::StorageError::from)?;
        entries.insert(user_id, value.clone());
        self.write(key, &entries)
            .await
            .map_err(domain::StorageError::from)?;
        Ok(value)
    }
}

impl domain::ProfileRepository for JsonFile {
    async fn read_profile(
        &self,
        user_id: domain::UserID,
    ) -> Result<Option<domain::UserProfile>, domain::ReadError> {
        self.get(KEY_PROFILES, user_id).await
    }

    async fn write_profile(
        &self,
        user_id: domain::UserID,
        profile: domain::UserProfile,
    ) -> Result<domain::UserProfile, domain::UpdateError> {
        self.put(KEY_PROFILES, user_id, profile).await
    }
}

impl domain::RecoveryRepository for JsonFile {
    async fn read_recovery(
        &self,
        user_id: domain::UserID,
    ) -> Result<Option<domain::RecoveryState>, domain::ReadError> {
        self.get(KEY_RECOVERY, user_id).await
    }

    async fn write_recovery(
        &self,
        user_id: domain::UserID,
        recovery: domain::RecoveryState,
    ) -> Result<domain::RecoveryState, domain::UpdateError> {
        self.put(KEY_RECOVERY, user_id, recovery).await
    }
}
