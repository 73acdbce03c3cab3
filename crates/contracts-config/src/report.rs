use crate::config::ContractConfig;
use std::path::Path;
use tracing::info;

/// Receives progress diagnostics from [ConfigGenerator](crate::ConfigGenerator)
pub trait Reporter {
    /// Called after `contract` (a `<path>:<contractName>` key) compiled, before its config is
    /// written
    fn compiled(&self, contract: &str, config: &ContractConfig);

    /// Called after the config of `contract` was written to `path`
    fn written(&self, contract: &str, path: &Path);
}

/// Logs diagnostics through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn compiled(&self, contract: &str, config: &ContractConfig) {
        info!(%contract, "config: {config}");
    }

    fn written(&self, contract: &str, path: &Path) {
        info!(%contract, path = %path.display(), "Config written");
    }
}

/// Discards all diagnostics
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn compiled(&self, _contract: &str, _config: &ContractConfig) {}

    fn written(&self, _contract: &str, _path: &Path) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn compiled(&self, contract: &str, config: &ContractConfig) {
        (**self).compiled(contract, config)
    }

    fn written(&self, contract: &str, path: &Path) {
        (**self).written(contract, path)
    }
}
