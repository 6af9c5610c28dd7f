//! Transfer type - 포지션 간 이체 및 조건부 이체

use serde::{Deserialize, Serialize};

/// 이체 파라미터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
    pub sender_position_id: String,
    pub receiver_position_id: String,
    /// 수신자 STARK 공개키 (16진수)
    pub receiver_public_key: String,
    /// 담보 자산 수량
    pub human_amount: String,
    pub client_id: String,
    pub expiration_iso_timestamp: String,
}

/// 조건부 이체 파라미터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalTransferParams {
    #[serde(flatten)]
    pub transfer: TransferParams,
    /// Fact registry 컨트랙트 주소
    pub fact_registry_address: String,
    /// 32바이트 fact (16진수)
    pub fact: String,
}

/// StarkEx 이체 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareTransfer {
    pub sender_position_id: String,
    pub receiver_position_id: String,
    pub receiver_public_key: String,
    /// 담보 자산 ID (16진수)
    pub asset_id: String,
    pub quantums_amount: String,
    /// 10진수 nonce
    pub nonce: String,
    pub expiration_epoch_hours: u64,
}

/// StarkEx 조건부 이체 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareConditionalTransfer {
    #[serde(flatten)]
    pub transfer: StarkwareTransfer,
    /// 250비트 조건 (16진수)
    pub condition: String,
}
