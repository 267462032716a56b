//! Lookup of compiled contract artifacts (Hardhat `artifacts/` or Foundry `out/`)

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::Bytes;
use json::JsonValue;
use tracing::debug;

use crate::{
    constants::{BUILD_INFO_DIR, DEBUG_ARTIFACT_SUFFIX},
    deploy::ContractFactory,
    errors::ScriptError,
};

/// A directory of compiled contract artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Root of the artifacts tree
    root: PathBuf,
}

impl ArtifactStore {
    /// Store reading the artifacts found under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a contract by name.
    ///
    /// `name` is either a bare contract name (`SimpleAuction`) or a fully
    /// qualified one (`contracts/SimpleAuction.sol:SimpleAuction`).
    pub fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        let (contract_name, artifact_path) = match name.rsplit_once(':') {
            Some((source, contract_name)) => (
                contract_name,
                self.root
                    .join(source)
                    .join(format!("{contract_name}.json")),
            ),
            None => (name, self.find_artifact(name)?),
        };
        debug!("Reading artifact {}", artifact_path.display());

        let artifact = read_artifact(&artifact_path)?;
        parse_artifact(contract_name, &artifact)
    }

    /// Find the single artifact file named after the contract
    fn find_artifact(&self, contract_name: &str) -> Result<PathBuf, ScriptError> {
        if !self.root.is_dir() {
            return Err(ScriptError::ArtifactResolution(format!(
                "artifacts directory {} not found, compile the contracts first",
                self.root.display()
            )));
        }

        let file_name = format!("{contract_name}.json");
        let mut matches = Vec::new();
        collect_artifacts(&self.root, &file_name, &mut matches)?;

        match matches.len() {
            0 => Err(ScriptError::ArtifactResolution(format!(
                "no artifact for contract {contract_name} in {}",
                self.root.display()
            ))),
            1 => Ok(matches.remove(0)),
            _ => Err(ScriptError::ArtifactResolution(format!(
                "multiple artifacts for contract {contract_name}, use a fully qualified name: {}",
                matches
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

/// Recursively collect the files called `file_name` under `dir`
fn collect_artifacts(
    dir: &Path,
    file_name: &str,
    matches: &mut Vec<PathBuf>,
) -> Result<(), ScriptError> {
    let entries = fs::read_dir(dir).map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?;
    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?
            .path();
        let Some(entry_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if path.is_dir() {
            if entry_name != BUILD_INFO_DIR {
                collect_artifacts(&path, file_name, matches)?;
            }
        } else if entry_name == file_name && !entry_name.ends_with(DEBUG_ARTIFACT_SUFFIX) {
            matches.push(path);
        }
    }

    Ok(())
}

/// Parses the JSON artifact at the given path
fn read_artifact(path: &Path) -> Result<JsonValue, ScriptError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScriptError::ArtifactResolution(format!("cannot read {}: {e}", path.display()))
    })?;

    json::parse(&content).map_err(|e| {
        ScriptError::ArtifactResolution(format!("invalid artifact {}: {e}", path.display()))
    })
}

/// Extract the creation bytecode from a parsed artifact
fn parse_artifact(contract_name: &str, artifact: &JsonValue) -> Result<ContractFactory, ScriptError> {
    if let Some(found) = artifact["contractName"].as_str() {
        if found != contract_name {
            return Err(ScriptError::ArtifactResolution(format!(
                "artifact holds contract {found}, expected {contract_name}"
            )));
        }
    }

    if !artifact["linkReferences"].is_empty() || !artifact["bytecode"]["linkReferences"].is_empty()
    {
        return Err(ScriptError::ArtifactResolution(format!(
            "contract {contract_name} needs linked libraries, which are not supported"
        )));
    }

    // Hardhat stores a hex string, Foundry an object with the hex under `object`
    let bytecode = &artifact["bytecode"];
    let hex = if bytecode.is_object() {
        bytecode["object"].as_str()
    } else {
        bytecode.as_str()
    }
    .ok_or_else(|| {
        ScriptError::ArtifactResolution(format!("artifact of {contract_name} has no bytecode"))
    })?;

    let bytecode = Bytes::from_str(hex).map_err(|e| {
        ScriptError::ArtifactResolution(format!("invalid bytecode for {contract_name}: {e}"))
    })?;
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactResolution(format!(
            "contract {contract_name} has no creation bytecode, is it abstract or an interface?"
        )));
    }

    Ok(ContractFactory::new(contract_name, bytecode))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::bytes;
    use tempfile::TempDir;

    use super::*;

    fn hardhat_artifact(name: &str, bytecode: &str) -> String {
        format!(
            r#"{{
                "_format": "hh-sol-artifact-1",
                "contractName": "{name}",
                "sourceName": "contracts/{name}.sol",
                "abi": [],
                "bytecode": "{bytecode}",
                "deployedBytecode": "0x",
                "linkReferences": {{}},
                "deployedLinkReferences": {{}}
            }}"#
        )
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn store_with_simple_auction() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "contracts/SimpleAuction.sol/SimpleAuction.json",
            &hardhat_artifact("SimpleAuction", "0x60806040"),
        );
        write(
            dir.path(),
            "contracts/SimpleAuction.sol/SimpleAuction.dbg.json",
            r#"{"_format": "hh-sol-dbg-1", "buildInfo": "../../build-info/abc.json"}"#,
        );
        write(dir.path(), "build-info/abc.json", "{}");
        dir
    }

    #[test]
    fn test_resolve_by_name() {
        let dir = store_with_simple_auction();
        let factory = ArtifactStore::new(dir.path())
            .get_contract_factory("SimpleAuction")
            .unwrap();

        assert_eq!(factory.name(), "SimpleAuction");
        assert_eq!(factory.bytecode(), &bytes!("60806040"));
    }

    #[test]
    fn test_resolve_fully_qualified_name() {
        let dir = store_with_simple_auction();
        let factory = ArtifactStore::new(dir.path())
            .get_contract_factory("contracts/SimpleAuction.sol:SimpleAuction")
            .unwrap();

        assert_eq!(factory.bytecode(), &bytes!("60806040"));
    }

    #[test]
    fn test_foundry_artifact() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "SimpleAuction.sol/SimpleAuction.json",
            r#"{"abi": [], "bytecode": {"object": "0x6080", "linkReferences": {}}}"#,
        );

        let factory = ArtifactStore::new(dir.path())
            .get_contract_factory("SimpleAuction")
            .unwrap();
        assert_eq!(factory.bytecode(), &bytes!("6080"));
    }

    #[test]
    fn test_missing_artifact() {
        let dir = store_with_simple_auction();
        let store = ArtifactStore::new(dir.path());

        assert!(matches!(
            store.get_contract_factory("EnglishAuction"),
            Err(ScriptError::ArtifactResolution(_))
        ));
        assert!(matches!(
            ArtifactStore::new(dir.path().join("nope")).get_contract_factory("SimpleAuction"),
            Err(ScriptError::ArtifactResolution(_))
        ));
    }

    #[test]
    fn test_ambiguous_name() {
        let dir = store_with_simple_auction();
        write(
            dir.path(),
            "contracts/legacy/SimpleAuction.sol/SimpleAuction.json",
            &hardhat_artifact("SimpleAuction", "0x6080"),
        );

        let err = ArtifactStore::new(dir.path())
            .get_contract_factory("SimpleAuction")
            .unwrap_err();
        assert!(err.to_string().contains("fully qualified"));
    }

    #[test]
    fn test_interface_has_no_bytecode() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "contracts/IAuction.sol/IAuction.json",
            &hardhat_artifact("IAuction", "0x"),
        );

        let err = ArtifactStore::new(dir.path())
            .get_contract_factory("IAuction")
            .unwrap_err();
        assert!(err.to_string().contains("no creation bytecode"));
    }

    #[test]
    fn test_unlinked_libraries_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "contracts/SimpleAuction.sol/SimpleAuction.json",
            r#"{
                "contractName": "SimpleAuction",
                "bytecode": "0x6080__$abc$__",
                "linkReferences": {"contracts/Lib.sol": {"Lib": [{"length": 20, "start": 2}]}}
            }"#,
        );

        let err = ArtifactStore::new(dir.path())
            .get_contract_factory("SimpleAuction")
            .unwrap_err();
        assert!(err.to_string().contains("linked libraries"));
    }
}
