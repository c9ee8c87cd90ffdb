use std::path::PathBuf;

use alloy::primitives::{address, Address, U256};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::base::{BaseConfig, DEFAULT_OUTPUT};

/// The only token inspected.
pub const TOKEN_ID: u64 = 1;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    #[default]
    Sepolia,
}

impl Network {
    pub fn to_base_config(&self) -> BaseConfig {
        match self {
            Self::Sepolia => sepolia(),
        }
    }

    /// Address of the master collection contract on this network.
    pub fn contract(&self) -> Address {
        match self {
            Self::Sepolia => address!("8a94e7c81a4982a80405b5aead52155208b40d18"),
        }
    }

    pub fn token_id(&self) -> U256 {
        U256::from(TOKEN_ID)
    }
}

pub fn sepolia() -> BaseConfig {
    BaseConfig {
        execution_rpc: "https://rpc.sepolia.org".to_string(),
        output: PathBuf::from(DEFAULT_OUTPUT),
    }
}
