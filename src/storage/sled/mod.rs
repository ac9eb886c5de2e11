pub(super) mod error;
mod flush_impl;
mod internal;
mod todos_impl;

#[cfg(feature = "integration_tests")]
pub mod test_util;

use super::{Todo, TodoDraft, TodoId, TodoStorage, TodoVersion, UpdateTodo};
use crate::config::types::SledConfig;
use bincode::config::{self};
use error::{SledStartupError, SledStorageError};
use internal::{Key, KeyPrefix, PrefixKind};
use tracing::{info_span, instrument};

pub(crate) static SLED_TODO_TREE: &str = "todos";
const BINCODE_CONFIG: config::Configuration = config::standard()
    .with_variable_int_encoding()
    .with_little_endian();

use bincode::{Decode, Encode};

type BincodeConfig = bincode::config::Configuration;

trait ToBytesWithConfig: Encode {
    type Error;

    fn to_bytes(&self, config: &BincodeConfig) -> Result<Vec<u8>, Self::Error>;
}

trait FromBytesWithConfig: Decode<()> {
    type Error;

    fn from_bytes(bytes: &[u8], config: &BincodeConfig) -> Result<Self, Self::Error>;
}

pub(crate) struct SledStorage {
    todo_tree: sled::Tree,
    bincode_config: config::Configuration,
}

impl SledStorage {
    #[instrument(name = "Storage::new")]
    pub fn new(sled_config: &SledConfig) -> Result<Self, SledStartupError> {
        let db = info_span!("sled::open_db").in_scope(|| {
            let config = sled::Config::default().path(&sled_config.path);
            config.open().map_err(|e| {
                tracing::error!(error = %e, path = ?sled_config.path, "failed to open db");
                SledStartupError::OpenSledStorageError(e)
            })
        })?;

        let todo_tree = info_span!("sled::open_todo_tree").in_scope(|| {
            db.open_tree(SLED_TODO_TREE).map_err(|e| {
                tracing::error!(error = %e, tree_name = SLED_TODO_TREE, "failed to open todo tree");
                SledStartupError::OpenSledStorageError(e)
            })
        })?;

        Ok(Self {
            todo_tree,
            bincode_config: BINCODE_CONFIG,
        })
    }
}

fn todo_key(todo_id: &TodoId) -> Key {
    Key::new(KeyPrefix::from_kind(PrefixKind::Todo), todo_id)
}

impl FromBytesWithConfig for TodoVersion {
    type Error = SledStorageError;

    #[instrument(name = "TodoVersion::from_bytes", skip_all)]
    fn from_bytes(bytes: &[u8], config: &BincodeConfig) -> Result<Self, Self::Error> {
        let (todo, _len) = bincode::decode_from_slice::<TodoVersion, _>(bytes, *config)?;
        Ok(todo)
    }
}

impl ToBytesWithConfig for TodoVersion {
    type Error = SledStorageError;

    #[instrument(name = "TodoVersion::to_bytes", skip_all)]
    fn to_bytes(&self, config: &BincodeConfig) -> Result<Vec<u8>, Self::Error> {
        let bytes = bincode::encode_to_vec(self, *config)?;
        Ok(bytes)
    }
}
