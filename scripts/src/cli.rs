//! Definitions of CLI arguments for the deploy script

use std::{path::PathBuf, str::FromStr, time::Duration};

use alloy::primitives::B256;
use clap::Parser;
use reqwest::Url;

use crate::{
    config::DeployConfig,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_RPC},
    errors::ScriptError,
};

/// Deploy the SimpleAuction contract and print its address
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC)]
    pub rpc_url: String,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Number of confirmations to wait for
    #[arg(
        long,
        env = "CONFIRMATIONS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// Give up waiting for the confirmation after this many seconds
    #[arg(long, env = "DEPLOY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// JSON file recording the deployed addresses
    #[arg(short, long, env = "DEPLOYMENTS_FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Validate the raw arguments into a deploy config
    pub fn into_config(self) -> Result<DeployConfig, ScriptError> {
        let priv_key = self.priv_key.ok_or_else(|| {
            ScriptError::ClientInitialization(
                "no private key given, set PRIVATE_KEY or pass --priv-key".to_string(),
            )
        })?;
        let private_key = B256::from_str(priv_key.trim())
            .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {e}")))?;

        let rpc_url = self
            .rpc_url
            .parse::<Url>()
            .map_err(|e| ScriptError::ClientInitialization(format!("invalid rpc url: {e}")))?;

        Ok(DeployConfig {
            rpc_url,
            private_key,
            artifacts_dir: self.artifacts,
            confirmations: self.confirmations,
            timeout: self.timeout_secs.map(Duration::from_secs),
            output_file: self.output,
        })
    }
}

/// Exit code for an argument parsing failure.
///
/// Help and version output keep clap's own code, every actual error is a
/// failed run and exits with 1.
pub fn usage_exit_code(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        1
    } else {
        e.exit_code() as u8
    }
}
