//! In-memory storage
//!
//! Keeps profiles and recovery states for the lifetime of the process.

use std::collections::BTreeMap;

use liftplan_domain as domain;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemory {
    profiles: Mutex<BTreeMap<domain::UserID, domain::UserProfile>>,
    recovery: Mutex<BTreeMap<domain::UserID, domain::RecoveryState>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl domain::ProfileRepository for InMemory {
    async fn read_profile(
        &self,
        user_id: domain::UserID,
    ) -> Result<Option<domain::UserProfile>, domain::ReadError> {
        Ok(self.profiles.lock().await.get(&user_id).cloned())
    }

    async fn write_profile(
        &self,
        user_id: domain::UserID,
        profile: domain::UserProfile,
    ) -> Result<domain::UserProfile, domain::UpdateError> {
        self.profiles.lock().await.insert(user_id, profile.clone());
        Ok(profile)
    }
}

impl domain::RecoveryRepository for InMemory {
    async fn read_recovery(
        &self,
        user_id: domain::UserID,
    ) -> Result<Option<domain::RecoveryState>, domain::ReadError> {
        Ok(self.recovery.lock().await.get(&user_id).cloned())
    }

    async fn write_recovery(
        &self,
        user_id: domain::UserID,
        recovery: domain::RecoveryState,
    ) -> Result<domain::RecoveryState, domain::UpdateError> {
        self.recovery.lock().await.insert(user_id, recovery.clone());
        Ok(recovery)
    }
}

#[cfg(test)]
mod tests {
    use liftplan_domain::{ProfileRepository, RecoveryRepository};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::data::{PROFILE, PROFILE_2, RECOVERY, RECOVERY_2, USER, USER_2};

    #[tokio::test]
    async fn test_read_profile_empty() {
        assert_eq!(InMemory::new().read_profile(USER).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_profile() {
        let storage = InMemory::new();

        assert_eq!(
            storage.write_profile(USER, PROFILE.clone()).await.unwrap(),
            *PROFILE
        );
        assert_eq!(
            storage.write_profile(USER_2, PROFILE_2.clone()).await.unwrap(),
            *PROFILE_2
        );
        assert_eq!(
            storage.read_profile(USER).await.unwrap(),
            Some(PROFILE.clone())
        );
        assert_eq!(
            storage.read_profile(USER_2).await.unwrap(),
            Some(PROFILE_2.clone())
        );

        storage.write_profile(USER, PROFILE_2.clone()).await.unwrap();
        assert_eq!(
            storage.read_profile(USER).await.unwrap(),
            Some(PROFILE_2.clone())
        );
    }

    #[tokio::test]
    async fn test_write_recovery() {
        let storage = InMemory::new();

        assert_eq!(storage.read_recovery(USER).await.unwrap(), None);
        storage.write_recovery(USER, RECOVERY.clone()).await.unwrap();
        storage
            .write_recovery(USER_2, RECOVERY_2.clone())
            .await
            .unwrap();
        assert_eq!(
            storage.read_recovery(USER).await.unwrap(),
            Some(RECOVERY.clone())
        );
        assert_eq!(
            storage.read_recovery(USER_2).await.unwrap(),
            Some(RECOVERY_2.clone())
        );
    }
}
