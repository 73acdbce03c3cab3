use crate::{
    compiler::{contract_key, Compiler},
    config::{write_config, ContractConfig},
    error::{ConfigGenError, ConfigGenResult},
    report::{Reporter, TracingReporter},
    unit::CompilationUnit,
};
use std::path::PathBuf;

/// Compiles contracts and writes their ABI/bytecode configs
#[derive(Debug)]
pub struct ConfigGenerator<C, R = TracingReporter> {
    compiler: C,
    reporter: R,
    root: PathBuf,
}

impl<C: Compiler> ConfigGenerator<C> {
    /// Creates a generator logging through `tracing` and resolving outputs against the current
    /// directory
    pub fn new(compiler: C) -> Self {
        Self { compiler, reporter: TracingReporter, root: PathBuf::from(".") }
    }
}

impl<C: Compiler, R: Reporter> ConfigGenerator<C, R> {
    /// Replaces the reporter receiving progress diagnostics
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> ConfigGenerator<C, R2> {
        ConfigGenerator { compiler: self.compiler, reporter, root: self.root }
    }

    /// Sets the directory relative output paths are resolved against
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Returns the underlying compiler
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Compiles `source_path` and extracts the ABI and bytecode of `contract_name`
    pub fn compile(
        &self,
        source_path: &str,
        contract_name: &str,
    ) -> ConfigGenResult<ContractConfig> {
        let mut output = self.compiler.compile_files(&[source_path])?;
        let key = contract_key(source_path, contract_name);
        let config: ContractConfig = output
            .take(&key)
            .ok_or_else(|| ConfigGenError::ContractNotFound { key: key.clone() })?
            .into();

        self.reporter.compiled(&key, &config);
        Ok(config)
    }

    /// Resolves the output path of `unit`
    pub fn output_path(&self, unit: &CompilationUnit) -> PathBuf {
        self.root.join(&unit.output_path)
    }

    /// Compiles `unit` and writes its config, returning the written path
    pub fn generate(&self, unit: &CompilationUnit) -> ConfigGenResult<PathBuf> {
        let config = self.compile(&unit.source_path, &unit.contract_name)?;
        let path = self.output_path(unit);
        write_config(&config, &path)?;

        self.reporter.written(&contract_key(&unit.source_path, &unit.contract_name), &path);
        Ok(path)
    }

    /// Generates configs for all `units` in order, stopping at the first failure.
    ///
    /// Configs written before a failure are left in place.
    pub fn run(&self, units: &[CompilationUnit]) -> ConfigGenResult<Vec<PathBuf>> {
        units.iter().map(|unit| self.generate(unit)).collect()
    }
}
