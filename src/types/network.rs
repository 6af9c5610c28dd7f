//! Network type - 서명 대상 네트워크

use serde::{Deserialize, Serialize};
use std::fmt;

/// 네트워크 ID (Ethereum chain ID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    Mainnet,
    Ropsten,
    Goerli,
}

impl NetworkId {
    /// Ethereum chain ID
    pub fn chain_id(&self) -> u64 {
        match self {
            NetworkId::Mainnet => 1,
            NetworkId::Ropsten => 3,
            NetworkId::Goerli => 5,
        }
    }

    /// chain ID에서 네트워크 조회
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(NetworkId::Mainnet),
            3 => Some(NetworkId::Ropsten),
            5 => Some(NetworkId::Goerli),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "mainnet",
            NetworkId::Ropsten => "ropsten",
            NetworkId::Goerli => "goerli",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
