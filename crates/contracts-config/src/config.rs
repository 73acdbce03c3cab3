use crate::{
    compiler::ContractArtifact,
    error::{ConfigGenError, ConfigGenResult},
    format::{to_dumps_string, to_dumps_vec},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, fs::File, io::Write, path::Path};

/// ABI and bytecode of a single contract, as written to the config file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub abi: Value,
    pub bin: String,
}

impl From<ContractArtifact> for ContractConfig {
    fn from(artifact: ContractArtifact) -> Self {
        Self { abi: artifact.abi, bin: artifact.bin }
    }
}

impl fmt::Display for ContractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = to_dumps_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// Writes `config` to `path`, creating the file or truncating an existing one.
///
/// The config is serialized before the file is opened, so a failed serialization leaves any
/// existing file untouched.
pub fn write_config(config: &ContractConfig, path: impl AsRef<Path>) -> ConfigGenResult<()> {
    let path = path.as_ref();
    let data = to_dumps_vec(config)?;

    let output_err = |inner| ConfigGenError::OutputWrite { path: path.to_path_buf(), inner };
    let mut file = File::create(path).map_err(output_err)?;
    file.write_all(&data).map_err(output_err)?;
    file.flush().map_err(output_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(bin: &str) -> ContractConfig {
        ContractConfig {
            abi: json!([{"type": "function", "name": "f", "inputs": [], "outputs": []}]),
            bin: bin.into(),
        }
    }

    #[test]
    fn display_uses_dumps_layout() {
        let config = ContractConfig { abi: json!([]), bin: "00".into() };
        assert_eq!(config.to_string(), r#"{"abi": [], "bin": "00"}"#);
    }

    #[test]
    fn write_truncates_previous_content() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("campaign.json");

        write_config(&config(&"ab".repeat(64)), &path)?;
        write_config(&config("01"), &path)?;

        let text = std::fs::read_to_string(&path)?;
        assert_eq!(serde_json::from_str::<ContractConfig>(&text)?, config("01"));
        assert_eq!(text, config("01").to_string());
        Ok(())
    }

    #[test]
    fn write_into_missing_directory() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("rpt.json");

        let err = write_config(&config("01"), &path).unwrap_err();
        assert!(matches!(err, ConfigGenError::OutputWrite { path: ref p, .. } if p == &path));
        assert!(!dir.path().join("missing").exists());
        Ok(())
    }
}
