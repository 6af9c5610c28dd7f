//! Registration type - Ethereum 주소와 STARK 키 연결

use serde::{Deserialize, Serialize};

/// StarkEx 등록 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkwareRegistration {
    /// Ethereum 주소 (20바이트)
    pub eth_key: String,
    /// STARK 공개키 x 좌표
    pub stark_key: String,
}
