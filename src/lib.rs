//! StarkEx Signer: StarkEx perpetual message hashing and signing
//!
//! 주문, 이체, 조건부 이체, 출금, 등록, 오라클 가격 메시지를 StarkEx 검증기와
//! 비트 단위로 일치하는 형식으로 해싱하고 STARK 곡선으로 서명합니다.
//!
//! ```rust,ignore
//! use starkex_signer::{Signable, StarkExConfig, StarkKeyPair, NetworkId};
//!
//! let config = StarkExConfig::new().with_network_id(NetworkId::Goerli);
//! let signable = Signable::from_order(&params, &config)?;
//! let signature = signable.sign(&StarkKeyPair::from_hex(private_key)?)?;
//! ```

pub mod config;
pub mod constants;
pub mod crypto;
pub mod errors;
pub mod helpers;
pub mod signable;
pub mod types;
pub mod utils;

// Re-exports
pub use config::StarkExConfig;
pub use crypto::{CryptoBackend, StarkKeyPair, StarkSignature};
pub use errors::{StarkExError, StarkExResult};
pub use signable::{MessageKind, Signable, SignableState, StarkMessage};
pub use types::{
    AssetRegistry, ConditionalTransferParams, NetworkId, OracleAsset, OraclePriceParams,
    OrderAmountParams, OrderParams, OrderSide, TransferParams, WithdrawalParams,
};
