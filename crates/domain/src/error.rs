#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ReadError> for UpdateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => UpdateError::Storage(storage),
            ReadError::Other(other) => UpdateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("user profile not found")]
    UserProfileNotFound,
    #[error("no eligible exercises for workout")]
    OptimizationFailed,
    #[error(transparent)]
    Storage(StorageError),
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl From<StorageError> for WorkoutError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NoSession => WorkoutError::Unauthorized,
            storage => WorkoutError::Storage(storage),
        }
    }
}

impl From<ReadError> for WorkoutError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => storage.into(),
            ReadError::Other(other) => WorkoutError::Other(other),
        }
    }
}

impl From<UpdateError> for WorkoutError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Storage(storage) => storage.into(),
            UpdateError::Other(other) => WorkoutError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    Other(String),
}
