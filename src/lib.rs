mod app;
mod config;
pub(crate) mod handlers;
mod init;
pub(crate) mod service;
pub(crate) mod storage;

mod docs;

pub use config::Settings;
pub use handlers::error::AppError;
pub use init::StartupError;

use axum::Router;
use opentelemetry_sdk::trace::SdkTracerProvider;

#[cfg(feature = "integration_tests")]
pub use app::build_app;

#[cfg(feature = "integration_tests")]
pub use storage::{Todo, TodoId};

#[cfg(feature = "integration_tests")]
pub use service::Service;

#[cfg(feature = "integration_tests")]
pub use storage::test_util::{outage_message, FailingStorage, TestStorageBuilder};

use tracing::{info, instrument};

pub(crate) static APP_NAME: &str = "todo_service";

#[macro_export]
macro_rules! trace_err {
    ($expr:expr, $($arg:tt)*) => {
        $expr.map_err(|e| {
            ::tracing::error!(%e, $($arg)*);
            e
        })
    };
}

pub struct TracingProviderGuard {
    provider: SdkTracerProvider,
}

impl TracingProviderGuard {
    pub fn new(settings: &Settings) -> Result<Self, StartupError> {
        Ok(Self {
            provider: init::init_tracer_provider(settings)?,
        })
    }
}

impl Drop for TracingProviderGuard {
    fn drop(&mut self) {
        let _ = self.provider.shutdown();
    }
}

#[instrument(name = "init_app", skip_all)]
pub fn init_app(settings: Settings) -> Result<(Router, service::Service), StartupError> {
    info!(settings = ?settings, "init_app with settings");

    let service = init::init_storage(&settings)?;

    Ok((app::build_app(service.clone()), service))
}
