use std::{fmt::LowerHex, fs, fs::File, io::Read, path::Path};

use json::JsonValue;

use crate::errors::ScriptError;

/// Entries of the deployment record file
pub enum OutputKeys {
    /// Address a contract was deployed to
    Deployment { key: &'static str },
    /// Hash of the transaction that created a contract
    DeploymentTx { key: &'static str },
}

/// Read a recorded value
#[cfg(test)]
pub fn read_output_file(file_path: &Path, key: OutputKeys) -> Result<String, ScriptError> {
    if !file_path.exists() {
        return Err(ScriptError::JsonOutputError(String::from(
            "Deployed addresses file not found",
        )));
    }

    // Parse it's json content into objects
    let parsed_json = get_json_from_file(file_path)?;
    let value = match key {
        OutputKeys::Deployment { key } => &parsed_json[key]["deploy"],
        OutputKeys::DeploymentTx { key } => &parsed_json[key]["tx"],
    };

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ScriptError::JsonOutputError(String::from("Key not found in output file")))
}

/// Writes the given value for the deployed contract
pub fn write_output_file<T: LowerHex>(
    file_path: &Path,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !file_path.exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    // Parse it's json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;

    // Update the right key
    match key {
        OutputKeys::Deployment { key } => {
            parsed_json[key]["deploy"] = JsonValue::String(format!("{value:#x}"))
        }
        OutputKeys::DeploymentTx { key } => {
            parsed_json[key]["tx"] = JsonValue::String(format!("{value:#x}"))
        }
    };

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}
