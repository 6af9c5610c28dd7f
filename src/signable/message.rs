//! Message variants

use crate::crypto::CryptoBackend;
use crate::errors::StarkExResult;
use crate::types::{
    StarkwareConditionalTransfer, StarkwareOraclePrice, StarkwareOrder, StarkwareRegistration,
    StarkwareTransfer, StarkwareWithdrawal,
};
use serde::{Deserialize, Serialize};
use starknet_types_core::felt::Felt;

/// 메시지 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Order,
    Transfer,
    ConditionalTransfer,
    Withdrawal,
    Registration,
    OraclePrice,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Order => "order",
            MessageKind::Transfer => "transfer",
            MessageKind::ConditionalTransfer => "conditional_transfer",
            MessageKind::Withdrawal => "withdrawal",
            MessageKind::Registration => "registration",
            MessageKind::OraclePrice => "oracle_price",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 서명 대상 StarkEx 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum StarkMessage {
    Order(StarkwareOrder),
    Transfer(StarkwareTransfer),
    ConditionalTransfer(StarkwareConditionalTransfer),
    Withdrawal(StarkwareWithdrawal),
    Registration(StarkwareRegistration),
    OraclePrice(StarkwareOraclePrice),
}

impl StarkMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            StarkMessage::Order(_) => MessageKind::Order,
            StarkMessage::Transfer(_) => MessageKind::Transfer,
            StarkMessage::ConditionalTransfer(_) => MessageKind::ConditionalTransfer,
            StarkMessage::Withdrawal(_) => MessageKind::Withdrawal,
            StarkMessage::Registration(_) => MessageKind::Registration,
            StarkMessage::OraclePrice(_) => MessageKind::OraclePrice,
        }
    }

    /// 해시 체인에 들어가는 필드 원소 (등록 메시지는 빈 목록)
    pub fn field_elements(&self) -> StarkExResult<Vec<Felt>> {
        match self {
            StarkMessage::Order(order) => order.field_elements(),
            StarkMessage::Transfer(transfer) => transfer.field_elements(),
            StarkMessage::ConditionalTransfer(transfer) => transfer.field_elements(),
            StarkMessage::Withdrawal(withdrawal) => withdrawal.field_elements(),
            StarkMessage::Registration(_) => Ok(Vec::new()),
            StarkMessage::OraclePrice(price) => price.field_elements(),
        }
    }

    /// 모든 필드가 선언된 비트 폭에 맞는지 검사
    pub fn validate(&self) -> StarkExResult<()> {
        match self {
            StarkMessage::Registration(registration) => registration.registration_hash().map(|_| ()),
            _ => self.field_elements().map(|_| ()),
        }
    }

    /// 메시지 해시 계산
    pub fn compute_hash(&self, backend: CryptoBackend) -> StarkExResult<Felt> {
        match self {
            StarkMessage::Registration(registration) => registration.registration_hash(),
            _ => backend.hash_chain(&self.field_elements()?),
        }
    }
}
