use std::{
    io::{self, Write},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    config::DeployConfig,
    constants::CONTRACT_NAME,
    deploy::{AuctionArgs, ContractDeployer, DeployedContract},
    errors::ScriptError,
    output_writer::{write_output_file, OutputKeys},
    tx::sender::RpcDeployer,
};

/// Deploy the auction contract through `deployer`, reporting progress on `out`.
///
/// When `output_file` is set the deployment is recorded there before the
/// result is printed, so a dead console cannot lose the record.
pub async fn deploy_simple_auction<D, W>(
    deployer: &D,
    output_file: Option<&Path>,
    out: &mut W,
) -> Result<DeployedContract, ScriptError>
where
    D: ContractDeployer + ?Sized,
    W: Write,
{
    writeln!(out, "Deploying {CONTRACT_NAME} contract...")?;

    let factory = deployer.get_contract_factory(CONTRACT_NAME)?;
    let args = AuctionArgs::vintage_laptop();

    let pending = deployer.deploy(&factory, &args).await?;
    let deployed = deployer.wait_for_deployment(pending).await?;

    if let Some(output_file) = output_file {
        match record_deployment(output_file, &deployed) {
            Ok(()) => info!("Deployment recorded in {}", output_file.display()),
            // The contract is live either way, only the bookkeeping is lost
            Err(e) => warn!("Could not record deployment: {}", e),
        }
    }

    let address = deployed.address();
    writeln!(out, "✅ Contract deployed to: {address}")?;
    writeln!(out)?;
    writeln!(out, "🔑 SAVE THIS ADDRESS!")?;
    writeln!(out, "Contract Address: {address}")?;

    Ok(deployed)
}

/// Connect to the configured network and deploy the auction contract
pub async fn run(config: DeployConfig) -> Result<DeployedContract, ScriptError> {
    let deployer = RpcDeployer::new(&config).await?;
    deploy_simple_auction(&deployer, config.output_file.as_deref(), &mut io::stdout()).await
}

/// Save the deployed address and creation tx hash
fn record_deployment(
    output_file: &Path,
    deployed: &DeployedContract,
) -> Result<(), ScriptError> {
    write_output_file(
        output_file,
        OutputKeys::Deployment { key: CONTRACT_NAME },
        deployed.address,
    )?;
    write_output_file(
        output_file,
        OutputKeys::DeploymentTx { key: CONTRACT_NAME },
        deployed.tx_hash,
    )
}

/// Report the outcome of a run, returning the process exit code
pub fn report_outcome<T, W: Write>(result: &Result<T, ScriptError>, err_out: &mut W) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            // Nothing left to do if stderr itself is gone
            let _ = writeln!(err_out, "Error: {e}\n{e:?}");
            1
        }
    }
}
