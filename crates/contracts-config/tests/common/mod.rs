use cpc_contracts_config::{
    contract_key, Compiler, CompilerOutput, ConfigGenError, ConfigGenResult, ContractArtifact,
    ContractConfig, Reporter,
};
use serde_json::{json, Value};
use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Compiler returning canned artifacts per source file and recording every invocation
#[derive(Default)]
pub struct StubCompiler {
    sources: HashMap<String, Vec<(String, ContractArtifact)>>,
    broken: Vec<String>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl StubCompiler {
    pub fn with_contract(mut self, source: &str, name: &str, abi: Value, bin: &str) -> Self {
        self.sources
            .entry(source.to_string())
            .or_default()
            .push((contract_key(source, name), ContractArtifact { abi, bin: bin.into() }));
        self
    }

    /// Makes compiling `source` fail like solc on an unparsable file
    pub fn with_broken_source(mut self, source: &str) -> Self {
        self.broken.push(source.to_string());
        self
    }
}

impl Compiler for StubCompiler {
    fn compile_files(&self, sources: &[&str]) -> ConfigGenResult<CompilerOutput> {
        self.calls.borrow_mut().push(sources.iter().map(|s| s.to_string()).collect());

        let mut output = CompilerOutput::new();
        for source in sources {
            if self.broken.iter().any(|b| b == source) {
                return Err(ConfigGenError::SourceRead {
                    path: source.to_string(),
                    inner: "ParserError: Expected pragma, import directive or contract".into(),
                });
            }
            for (key, artifact) in self.sources.get(*source).into_iter().flatten() {
                output.insert(key.clone(), artifact.clone());
            }
        }
        Ok(output)
    }
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Compiled(String, ContractConfig),
    Written(String, PathBuf),
}

/// Reporter keeping every diagnostic in memory
#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<Event>>,
}

impl Reporter for RecordingReporter {
    fn compiled(&self, contract: &str, config: &ContractConfig) {
        self.events.borrow_mut().push(Event::Compiled(contract.into(), config.clone()));
    }

    fn written(&self, contract: &str, path: &Path) {
        self.events.borrow_mut().push(Event::Written(contract.into(), path.to_path_buf()));
    }
}

pub fn function_abi(name: &str) -> Value {
    json!([{"type": "function", "name": name}])
}
