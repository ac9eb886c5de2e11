use std::str::Utf8Error;

use sled::transaction::TransactionError;
use strum_macros::AsRefStr;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug, AsRefStr)]
pub enum SledStartupError {
    #[error("Failed to open sled storage")]
    OpenSledStorageError(#[source] sled::Error),
}

#[derive(Error, Debug, AsRefStr)]
pub enum SledStorageError {
    #[error("Data for key not found")]
    NotFound,

    #[error("Failed to encode data")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Failed to decode data")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Failed to convert to utf8")]
    Conversion(#[from] Utf8Error),

    #[error("Failed to parse enum from string")]
    Strum(#[from] strum::ParseError),

    #[error(transparent)]
    Sled(#[from] sled::Error),

    #[error("Key without prefix: {0}")]
    InvalidKey(String),

    #[error("Stored timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("sled unabortable transaction error")]
    UnabortableTransaction(#[from] sled::transaction::UnabortableTransactionError),
}

impl From<SledStorageError> for sled::transaction::ConflictableTransactionError<SledStorageError> {
    fn from(value: SledStorageError) -> Self {
        sled::transaction::ConflictableTransactionError::Abort(value)
    }
}

impl From<TransactionError<SledStorageError>> for SledStorageError {
    fn from(value: TransactionError<SledStorageError>) -> Self {
        match value {
            TransactionError::Abort(e) => e,
            TransactionError::Storage(e) => Self::Sled(e),
        }
    }
}

impl From<SledStorageError> for StorageError {
    fn from(value: SledStorageError) -> Self {
        match value {
            SledStorageError::NotFound => {
                tracing::warn!(error = ?value, error_type = %value.as_ref(), "Record not found by id");
                Self::NotFound
            }
            _ => {
                tracing::error!(error = ?value, error_type = %value.as_ref(), "Storage error");
                Self::Internal(value)
            }
        }
    }
}
