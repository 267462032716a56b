//! Definitions of errors that can occur during the execution of the deploy script

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Error when building or reading the deployment record file
    JsonOutputError(String),
    /// Error when creating the client (bad config, unreachable node...)
    ClientInitialization(String),
    /// Error when resolving a compiled contract artifact by name
    ArtifactResolution(String),
    /// Error when fetching the nonce to deploy a contract
    NonceFetching(String),
    /// Error submitting the creation transaction
    ContractDeployment(String),
    /// Error while waiting for the creation transaction to be confirmed
    DeploymentConfirmation(String),
    /// Error writing progress lines to the console
    ConsoleOutput(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::JsonOutputError(s) => write!(f, "error writing json output: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::ArtifactResolution(s) => {
                write!(f, "error resolving contract artifact: {}", s)
            }
            ScriptError::NonceFetching(s) => {
                write!(f, "error during nonce fetching for client signing: {}", s)
            }
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::DeploymentConfirmation(s) => {
                write!(f, "error confirming contract deployment: {}", s)
            }
            ScriptError::ConsoleOutput(s) => write!(f, "error writing console output: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::ConsoleOutput(e.to_string())
    }
}
