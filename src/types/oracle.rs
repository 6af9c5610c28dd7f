//! Oracle price type - 오라클 가격 서명

use serde::{Deserialize, Serialize};

/// 오라클 가격의 자산 식별 방식
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OracleAsset {
    /// 서명용 자산 이름 (예: 'BTCUSD')
    AssetName(String),
    /// 마켓 심볼 (예: 'BTC-USD'), 하이픈 제거 후 자산 이름으로 사용
    Market(String),
}

/// 오라클 가격 파라미터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OraclePriceParams {
    pub asset: OracleAsset,
    /// 오라클 이름 (최대 5바이트)
    pub oracle_name: String,
    pub human_price: String,
    pub iso_timestamp: String,
}

/// StarkEx 오라클 가격 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareOraclePrice {
    /// 자산 이름 + 오라클 이름 (16진수, 일반 자산 ID와 다름)
    pub signed_asset_id: String,
    /// 18자리 고정소수점 가격
    pub signed_price: String,
    pub expiration_epoch_seconds: u64,
}
