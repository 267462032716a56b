//! Runtime configuration of the deploy script

use std::{path::PathBuf, time::Duration};

use alloy::primitives::B256;
use reqwest::Url;

/// Everything the deployer needs to reach the network and sign transactions
pub struct DeployConfig {
    /// JSON-RPC endpoint of the target network
    pub rpc_url: Url,
    /// Private key of the deployer account
    pub private_key: B256,
    /// Directory holding the compiled contract artifacts
    pub artifacts_dir: PathBuf,
    /// Number of confirmations to wait for
    pub confirmations: u64,
    /// Upper bound on the confirmation wait, none means wait forever
    pub timeout: Option<Duration>,
    /// Where to record successful deployments, if anywhere
    pub output_file: Option<PathBuf>,
}
