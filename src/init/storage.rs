use crate::{
    config::types::StorageKind,
    service::Service,
    storage::{FlushStorage, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::instrument;

use crate::storage::SledStorage;

use super::StartupError;

#[instrument(name = "init_storage")]
pub fn init_storage(settings: &Settings) -> Result<Service, StartupError> {
    let service = match &settings.storage.backend {
        StorageKind::Sled => {
            let sled_storage = Arc::new(
                SledStorage::new(
                    settings
                        .storage
                        .sled
                        .as_ref()
                        .ok_or(StartupError::MissingStorageConfig("sled".to_string()))?,
                )
                .map_err(StartupError::OpenSledStorage)?,
            );

            Service::new(
                sled_storage.clone() as Arc<dyn TodoStorage>,
                sled_storage as Arc<dyn FlushStorage>,
            )
        }
        kind => {
            return Err(StartupError::UnsupportedStorage(kind.as_ref().to_string()));
        }
    };

    Ok(service)
}
