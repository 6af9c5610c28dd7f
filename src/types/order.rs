//! Order type - 지정가 주문 파라미터 및 StarkEx 주문 메시지

use serde::{Deserialize, Serialize};

/// 주문 측면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// StarkEx 주문 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StarkwareOrderType {
    LimitOrderWithFees,
}

impl StarkwareOrderType {
    /// Type tag packed into the second order word
    pub fn prefix(&self) -> u64 {
        match self {
            StarkwareOrderType::LimitOrderWithFees => 3,
        }
    }
}

/// 주문 수량 파라미터
///
/// Exactly one of `human_price` and `human_quote_amount` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAmountParams {
    /// 마켓 심볼 (예: 'BTC-USD')
    pub market: String,
    /// 매수/매도
    pub side: OrderSide,
    /// 합성 자산 수량
    pub human_size: String,
    /// 가격
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_price: Option<String>,
    /// 담보 자산 수량 (가격 대신)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_quote_amount: Option<String>,
}

impl OrderAmountParams {
    /// 가격 기반 파라미터 생성
    pub fn with_price(
        market: impl Into<String>,
        side: OrderSide,
        human_size: impl Into<String>,
        human_price: impl Into<String>,
    ) -> Self {
        Self {
            market: market.into(),
            side,
            human_size: human_size.into(),
            human_price: Some(human_price.into()),
            human_quote_amount: None,
        }
    }

    /// 담보 수량 기반 파라미터 생성
    pub fn with_quote_amount(
        market: impl Into<String>,
        side: OrderSide,
        human_size: impl Into<String>,
        human_quote_amount: impl Into<String>,
    ) -> Self {
        Self {
            market: market.into(),
            side,
            human_size: human_size.into(),
            human_price: None,
            human_quote_amount: Some(human_quote_amount.into()),
        }
    }
}

/// 주문 파라미터
///
/// Exactly one of `client_id` and `nonce` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    /// 포지션 ID
    pub position_id: String,
    #[serde(flatten)]
    pub amounts: OrderAmountParams,
    /// 최대 수수료 비율 (예: 0.01 = 1%)
    pub limit_fee: String,
    /// 만료 시각 (ISO 8601)
    pub expiration_iso_timestamp: String,
    /// 클라이언트 ID (nonce 파생용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// 10진수 nonce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Quantum 단위로 변환된 주문 수량
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareAmounts {
    pub quantums_amount_synthetic: String,
    pub quantums_amount_collateral: String,
    pub asset_id_synthetic: String,
    pub asset_id_collateral: String,
    pub is_buying_synthetic: bool,
}

/// StarkEx 주문 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareOrder {
    pub order_type: StarkwareOrderType,
    #[serde(flatten)]
    pub amounts: StarkwareAmounts,
    pub quantums_amount_fee: String,
    pub asset_id_fee: String,
    pub position_id: String,
    /// 10진수 nonce
    pub nonce: String,
    pub expiration_epoch_hours: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_params_json() {
        let json = r#"{
            "positionId": "12345",
            "market": "BTC-USD",
            "side": "SELL",
            "humanSize": "145.0005",
            "humanPrice": "350.00067",
            "limitFee": "0.125",
            "expirationIsoTimestamp": "2020-09-17T04:15:55.028Z",
            "clientId": "This is an ID that the client came up with to describe this order"
        }"#;
        let params: OrderParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.amounts.side, OrderSide::Sell);
        assert_eq!(params.amounts.human_price.as_deref(), Some("350.00067"));
        assert!(params.amounts.human_quote_amount.is_none());
        assert!(params.nonce.is_none());
    }

    #[test]
    fn test_order_type_serde() {
        let json = serde_json::to_string(&StarkwareOrderType::LimitOrderWithFees).unwrap();
        assert_eq!(json, "\"LIMIT_ORDER_WITH_FEES\"");
        assert_eq!(StarkwareOrderType::LimitOrderWithFees.prefix(), 3);
    }
}
