//! Withdrawal type - 지정 주소로의 출금

use serde::{Deserialize, Serialize};

/// 출금 파라미터
///
/// Exactly one of `client_id` and `nonce` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalParams {
    pub position_id: String,
    /// 담보 자산 수량
    pub human_amount: String,
    pub expiration_iso_timestamp: String,
    /// 수령 Ethereum 주소
    pub eth_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// StarkEx 출금 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareWithdrawal {
    pub position_id: String,
    /// 담보 자산 ID (16진수)
    pub asset_id_collateral: String,
    pub quantums_amount: String,
    /// 10진수 nonce
    pub nonce: String,
    pub expiration_epoch_hours: u64,
    pub eth_address: String,
}
