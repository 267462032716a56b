//! Values flowing through a contract deployment

use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    sol_types::SolConstructor,
};

use crate::{
    constants::{AUCTION_DURATION_MINUTES, AUCTION_ITEM_NAME, AUCTION_MINIMUM_BID_WEI},
    tx::abi::SimpleAuction,
};

/// Constructor arguments of the auction contract, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionArgs {
    /// Name of the auctioned item
    pub item_name: String,
    /// Minimum accepted bid, in wei
    pub minimum_bid: U256,
    /// Auction duration, in minutes
    pub duration_minutes: U256,
}

impl AuctionArgs {
    /// The fixed arguments the deploy script always uses
    pub fn vintage_laptop() -> Self {
        Self {
            item_name: AUCTION_ITEM_NAME.to_string(),
            minimum_bid: U256::from(AUCTION_MINIMUM_BID_WEI),
            duration_minutes: U256::from(AUCTION_DURATION_MINUTES),
        }
    }

    /// The arguments as an ordered triple
    pub fn as_tuple(&self) -> (&str, U256, U256) {
        (&self.item_name, self.minimum_bid, self.duration_minutes)
    }

    /// ABI encode the arguments as the contract constructor expects them
    pub fn abi_encode(&self) -> Vec<u8> {
        SimpleAuction::constructorCall {
            itemName: self.item_name.clone(),
            minimumBid: self.minimum_bid,
            durationMinutes: self.duration_minutes,
        }
        .abi_encode()
    }
}

/// A compiled contract, ready to be deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFactory {
    /// Contract name, as found in its artifact
    name: String,
    /// Creation bytecode, without constructor arguments
    bytecode: Bytes,
}

impl ContractFactory {
    /// Wrap the creation bytecode of the contract `name`
    pub fn new(name: impl Into<String>, bytecode: Bytes) -> Self {
        Self {
            name: name.into(),
            bytecode,
        }
    }

    /// Name of the contract
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation bytecode of the contract
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Creation calldata: the bytecode followed by the encoded constructor args
    pub fn deploy_code(&self, args: &AuctionArgs) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&args.abi_encode());
        Bytes::from(code)
    }
}

/// A creation transaction that was submitted but not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeployment {
    /// Hash of the creation transaction
    pub tx_hash: TxHash,
    /// Address the contract will land on, derived from the sender nonce
    pub predicted_address: Address,
}

/// A confirmed contract deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    /// Address the contract lives at
    pub address: Address,
    /// Hash of the creation transaction
    pub tx_hash: TxHash,
    /// Block the creation transaction was mined in
    pub block_number: Option<u64>,
}

impl DeployedContract {
    /// Address of the deployed contract
    pub fn address(&self) -> Address {
        self.address
    }
}

/// Predict the address of a contract created by `sender` at the given `nonce`
pub fn predict_contract_address(sender: Address, nonce: u64) -> Address {
    sender.create(nonce)
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, bytes},
        sol_types::{sol_data, SolType},
    };

    use super::*;

    type ConstructorParams = (sol_data::String, sol_data::Uint<256>, sol_data::Uint<256>);

    #[test]
    fn test_vintage_laptop_args() {
        let args = AuctionArgs::vintage_laptop();
        let one_ether = alloy::primitives::utils::parse_ether("1").unwrap();

        assert_eq!(
            args.as_tuple(),
            ("Vintage Laptop", one_ether, U256::from(60))
        );
    }

    #[test]
    fn test_deploy_code_appends_constructor_args() {
        let bytecode = bytes!("6080604052348015600f57600080fd5b50");
        let factory = ContractFactory::new("SimpleAuction", bytecode.clone());
        let args = AuctionArgs::vintage_laptop();

        let code = factory.deploy_code(&args);
        assert!(code.starts_with(&bytecode));

        let (name, bid, duration) =
            ConstructorParams::abi_decode_params(&code[bytecode.len()..], true).unwrap();
        assert_eq!(name, "Vintage Laptop");
        assert_eq!(bid, U256::from(AUCTION_MINIMUM_BID_WEI));
        assert_eq!(duration, U256::from(60));
    }

    #[test]
    fn test_predicted_addresses_differ_per_nonce() {
        let sender = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

        // Well known first deployment address of the default dev account
        assert_eq!(
            predict_contract_address(sender, 0),
            address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_ne!(
            predict_contract_address(sender, 0),
            predict_contract_address(sender, 1)
        );
    }
}
