//! StarkEx message and configuration types

mod asset;
mod network;
mod oracle;
mod order;
mod registration;
mod transfer;
mod withdrawal;

pub use asset::{AssetConfig, AssetRegistry, MarketConfig};
pub use network::NetworkId;
pub use oracle::{OracleAsset, OraclePriceParams, StarkwareOraclePrice};
pub use order::{
    OrderAmountParams, OrderParams, OrderSide, StarkwareAmounts, StarkwareOrder,
    StarkwareOrderType,
};
pub use registration::StarkwareRegistration;
pub use transfer::{
    ConditionalTransferParams, StarkwareConditionalTransfer, StarkwareTransfer, TransferParams,
};
pub use withdrawal::{StarkwareWithdrawal, WithdrawalParams};
