//! Script for deploying the SimpleAuction smart contract.

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod deploy;
pub mod errors;

// Our output utils
mod output_writer;

pub mod tx;
