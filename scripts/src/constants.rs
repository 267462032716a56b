//! Constants used in the deploy script

/// Default RPC endpoint, a local development node
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Name of the contract deployed by the script
pub const CONTRACT_NAME: &str = "SimpleAuction";

/// Name of the item put up for auction
pub const AUCTION_ITEM_NAME: &str = "Vintage Laptop";

/// Minimum bid, 1 ether expressed in wei
pub const AUCTION_MINIMUM_BID_WEI: u128 = 1_000_000_000_000_000_000;

/// Auction duration, in minutes
pub const AUCTION_DURATION_MINUTES: u64 = 60;

/// Hardhat keeps compiler inputs / outputs here, never contract artifacts
pub const BUILD_INFO_DIR: &str = "build-info";

/// Suffix of the Hardhat debug files living next to each artifact
pub const DEBUG_ARTIFACT_SUFFIX: &str = ".dbg.json";
