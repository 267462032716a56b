//! Everything talking to the chain

pub mod abi;
pub mod client;
pub mod sender;
