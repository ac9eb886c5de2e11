use crate::storage::sled::error::SledStorageError;

use super::{Key, KeyPrefix};
use bincode::config;
use sled::Tree;
use tracing::{info, instrument};

/// Full scan over every record under a key prefix, in the tree's
/// lexicographic key order.
pub(crate) struct TreeScan<'a> {
    tree: &'a sled::Tree,
    prefix: KeyPrefix,
}

impl<'a> TreeScan<'a> {
    pub fn within(tree: &'a Tree, prefix: KeyPrefix) -> Self {
        Self { tree, prefix }
    }

    #[instrument(name = "TreeScan::collect", skip_all)]
    pub fn collect<T>(
        self,
        config: &config::Configuration,
        deserialize: impl Fn(&Key, &[u8], &config::Configuration) -> Result<T, SledStorageError>,
    ) -> Result<Vec<T>, SledStorageError> {
        info!(prefix = %self.prefix, "collect values with key prefix");

        let mut items = Vec::new();
        for item in self.tree.scan_prefix(self.prefix.as_str().as_bytes()) {
            let (key_bytes, value_bytes) = item?;
            let key = Key::from_bytes(&key_bytes)?;

            items.push(deserialize(&key, &value_bytes, config)?);
        }

        Ok(items)
    }
}
