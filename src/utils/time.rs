//! Time utilities

use crate::constants::ORDER_EXPIRATION_BUFFER_HOURS;
use crate::errors::{StarkExError, StarkExResult};
use chrono::DateTime;

const ONE_SECOND_MS: u64 = 1000;
const ONE_HOUR_MS: u64 = 60 * 60 * ONE_SECOND_MS;

/// ISO 8601 타임스탬프를 epoch 밀리초로 변환
fn iso_timestamp_to_epoch_ms(iso_timestamp: &str) -> StarkExResult<u64> {
    let datetime = DateTime::parse_from_rfc3339(iso_timestamp).map_err(|e| {
        StarkExError::invalid_params(format!("Invalid ISO timestamp {iso_timestamp}: {e}"))
    })?;

    u64::try_from(datetime.timestamp_millis()).map_err(|_| {
        StarkExError::invalid_params(format!("Timestamp before the epoch: {iso_timestamp}"))
    })
}

/// ISO 타임스탬프를 epoch 초로 변환 (내림)
pub fn iso_timestamp_to_epoch_seconds(iso_timestamp: &str) -> StarkExResult<u64> {
    Ok(iso_timestamp_to_epoch_ms(iso_timestamp)? / ONE_SECOND_MS)
}

/// ISO 타임스탬프를 epoch 시간(hour)으로 변환 (올림)
pub fn iso_timestamp_to_epoch_hours(iso_timestamp: &str) -> StarkExResult<u64> {
    Ok(epoch_ms_to_epoch_hours(iso_timestamp_to_epoch_ms(iso_timestamp)?))
}

/// epoch 밀리초를 epoch 시간으로 변환 (올림)
pub fn epoch_ms_to_epoch_hours(epoch_ms: u64) -> u64 {
    epoch_ms.div_ceil(ONE_HOUR_MS)
}

/// 주문 만료 시간에 정산 지연 버퍼(168시간) 추가
pub fn add_order_expiration_buffer_hours(expiration_epoch_hours: u64) -> u64 {
    expiration_epoch_hours + ORDER_EXPIRATION_BUFFER_HOURS
}
