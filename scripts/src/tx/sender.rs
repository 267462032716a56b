use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{PendingTransactionConfig, Provider},
    rpc::types::eth::{TransactionReceipt, TransactionRequest},
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    artifacts::ArtifactStore,
    config::DeployConfig,
    deploy::{
        predict_contract_address, AuctionArgs, ContractDeployer, ContractFactory,
        DeployedContract, PendingDeployment,
    },
    errors::ScriptError,
    tx::client::{create_rpc_provider, RpcProvider},
};

/// Deploys contracts from an artifact directory through a JSON-RPC node
pub struct RpcDeployer {
    client: RpcProvider,
    deployer: Address,
    artifacts: ArtifactStore,
    confirmations: u64,
    timeout: Option<std::time::Duration>,
}

impl RpcDeployer {
    /// Connect to the network described by the config
    pub async fn new(config: &DeployConfig) -> Result<Self, ScriptError> {
        let (client, deployer) = create_rpc_provider(config).await?;

        Ok(Self {
            client,
            deployer,
            artifacts: ArtifactStore::new(config.artifacts_dir.clone()),
            confirmations: config.confirmations,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl ContractDeployer for RpcDeployer {
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        self.artifacts.get_contract_factory(name)
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: &AuctionArgs,
    ) -> Result<PendingDeployment, ScriptError> {
        // Predict the contract address
        let nonce = self
            .client
            .get_transaction_count(self.deployer)
            .await
            .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;
        let predicted_address = predict_contract_address(self.deployer, nonce);
        debug!(
            "Deploying {} from {} with nonce {}, expecting address {}",
            factory.name(),
            self.deployer,
            nonce,
            predicted_address
        );

        // Build the tx
        let tx_request = build_deployment_request(self.deployer, nonce, factory, args);

        // Send it
        let pending_tx = self
            .client
            .send_transaction(tx_request)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!("Pending deployment transaction... {}", pending_tx.tx_hash());

        Ok(PendingDeployment {
            tx_hash: *pending_tx.tx_hash(),
            predicted_address,
        })
    }

    async fn wait_for_deployment(
        &self,
        pending: PendingDeployment,
    ) -> Result<DeployedContract, ScriptError> {
        let config = PendingTransactionConfig::new(pending.tx_hash)
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.timeout);

        // Wait for the transaction to be included.
        let tx_hash = self
            .client
            .watch_pending_transaction(config)
            .await
            .map_err(|e| ScriptError::DeploymentConfirmation(e.to_string()))?
            .await
            .map_err(|e| ScriptError::DeploymentConfirmation(e.to_string()))?;

        let receipt = self
            .client
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| ScriptError::DeploymentConfirmation(e.to_string()))?
            .ok_or_else(|| {
                ScriptError::DeploymentConfirmation(format!("no receipt for transaction {tx_hash}"))
            })?;
        let receipt = DeploymentReceipt::from(&receipt);

        let address = receipt.contract_address()?;
        if address != pending.predicted_address {
            debug!(
                "Contract landed on {} instead of predicted {}",
                address, pending.predicted_address
            );
        }

        let code = self
            .client
            .get_code_at(address)
            .await
            .map_err(|e| ScriptError::DeploymentConfirmation(e.to_string()))?;
        let deployed = check_deployment(&receipt, &code)?;
        info!(
            "Deployment tx done on block: {}",
            deployed.block_number.unwrap_or_default()
        );

        Ok(deployed)
    }
}

/// The parts of a creation receipt the deployment checks rely on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    /// Hash of the creation transaction
    pub tx_hash: TxHash,
    /// Whether the transaction executed without reverting
    pub status: bool,
    /// Address of the created contract, as reported by the node
    pub contract_address: Option<Address>,
    /// Block the transaction was mined in
    pub block_number: Option<u64>,
}

impl From<&TransactionReceipt> for DeploymentReceipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            status: receipt.status(),
            contract_address: receipt.contract_address,
            block_number: receipt.block_number,
        }
    }
}

impl DeploymentReceipt {
    /// Address of the created contract, failing if the creation did not go through
    pub fn contract_address(&self) -> Result<Address, ScriptError> {
        if !self.status {
            return Err(ScriptError::DeploymentConfirmation(format!(
                "deployment transaction {} reverted",
                self.tx_hash
            )));
        }

        self.contract_address.ok_or_else(|| {
            ScriptError::DeploymentConfirmation(format!(
                "receipt of {} carries no contract address",
                self.tx_hash
            ))
        })
    }
}

/// Confirm a deployment from its receipt and the code found at its address
pub fn check_deployment(
    receipt: &DeploymentReceipt,
    code: &Bytes,
) -> Result<DeployedContract, ScriptError> {
    let address = receipt.contract_address()?;

    // Make sure the constructor left some code behind
    if code.is_empty() {
        return Err(ScriptError::DeploymentConfirmation(format!(
            "no code found at {address} after deployment"
        )));
    }

    Ok(DeployedContract {
        address,
        tx_hash: receipt.tx_hash,
        block_number: receipt.block_number,
    })
}

/// Build the contract creation transaction
pub fn build_deployment_request(
    deployer: Address,
    nonce: u64,
    factory: &ContractFactory,
    args: &AuctionArgs,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(deployer)
        .with_nonce(nonce)
        .with_deploy_code(factory.deploy_code(args))
        .with_value(U256::from(0))
}
