//! The contract deployment seam: what the deploy runner needs from the chain

use async_trait::async_trait;

use crate::errors::ScriptError;

/// Deployment values and address prediction
mod types;

pub use types::{
    predict_contract_address, AuctionArgs, ContractFactory, DeployedContract, PendingDeployment,
};

/// Resolves compiled contracts and publishes them on chain
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    /// Resolve a compiled contract by its name
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, ScriptError>;

    /// Submit the creation transaction of `factory` built with `args`
    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: &AuctionArgs,
    ) -> Result<PendingDeployment, ScriptError>;

    /// Wait until the creation transaction is confirmed
    async fn wait_for_deployment(
        &self,
        pending: PendingDeployment,
    ) -> Result<DeployedContract, ScriptError>;
}
