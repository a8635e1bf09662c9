use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use liftplan_domain::EngineConfig;
use log::{LevelFilter, debug};

pub const ENV_ALL_RECOVERED: &str = "LIFTPLAN_ALL_RECOVERED";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Settings {
    /// Reads the settings from a JSON file. A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self, Error> {
        match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| Error::Invalid {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, using default settings", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Applies the value of the override environment variable.
    #[must_use]
    pub fn with_env(mut self, all_recovered: Option<&str>) -> Self {
        if all_recovered
            .is_some_and(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true"))
        {
            self.engine.all_recovered = true;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            data_dir: PathBuf::from(".liftplan"),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            Settings::load(&dir.path().join("liftplan.json"))
                .await
                .unwrap(),
            Settings::default()
        );
    }

    #[tokio::test]
    async fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liftplan.json");
        std::fs::write(
            &path,
            r#"{"data_dir": "/var/lib/liftplan", "log_level": "debug", "engine": {"upper_body_cap": 6}}"#,
        )
        .unwrap();

        assert_eq!(
            Settings::load(&path).await.unwrap(),
            Settings {
                engine: EngineConfig {
                    upper_body_cap: Some(6),
                    ..EngineConfig::default()
                },
                data_dir: PathBuf::from("/var/lib/liftplan"),
                log_level: LevelFilter::Debug,
            }
        );
    }

    #[tokio::test]
    async fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liftplan.json");
        std::fs::write(&path, r#"{"log_level": "loud"}"#).unwrap();

        assert!(matches!(
            Settings::load(&path).await,
            Err(Error::Invalid { .. })
        ));
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("1"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some("0"), false)]
    #[case(Some("yes"), false)]
    fn test_with_env(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(
            Settings::default().with_env(value).engine.all_recovered,
            expected
        );
    }
}
