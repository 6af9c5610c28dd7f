//! Oracle price helpers

use crate::constants::ORACLE_PRICE_DECIMALS;
use crate::errors::{StarkExError, StarkExResult};
use crate::types::OracleAsset;
use crate::utils::{Precise, Rounding};
use num_bigint::BigUint;

/// Bytes reserved for the asset name inside a signed asset id
const ASSET_NAME_BYTES: usize = 16;
/// Bytes reserved for the oracle name inside a signed asset id
const ORACLE_NAME_BYTES: usize = 5;

fn right_pad(field: &str, value: &str, width: usize) -> StarkExResult<Vec<u8>> {
    let bytes = value.as_bytes();
    if bytes.len() > width {
        return Err(StarkExError::FieldOverflow {
            field: field.to_string(),
            max_bits: (width * 8) as u64,
            actual_bits: (bytes.len() * 8) as u64,
        });
    }
    let mut padded = bytes.to_vec();
    padded.resize(width, 0);
    Ok(padded)
}

/// 서명용 자산 이름 (마켓 심볼은 하이픈 제거)
pub fn get_signed_asset_name(asset: &OracleAsset) -> String {
    match asset {
        OracleAsset::AssetName(name) => name.clone(),
        OracleAsset::Market(market) => market.replacen('-', "", 1),
    }
}

/// 자산 이름과 오라클 이름으로 서명용 자산 ID 생성 (최소 길이 16진수, 접두사 없음)
///
/// Asset name is right padded to 128 bits, oracle name to 40 bits.
pub fn get_signed_asset_id(asset_name: &str, oracle_name: &str) -> StarkExResult<String> {
    let mut bytes = right_pad("assetName", asset_name, ASSET_NAME_BYTES)?;
    bytes.extend(right_pad("oracleName", oracle_name, ORACLE_NAME_BYTES)?);
    Ok(BigUint::from_bytes_be(&bytes).to_str_radix(16))
}

/// 가격을 18자리 고정소수점 정수로 변환 (내림)
pub fn get_signed_price(human_price: &str) -> StarkExResult<String> {
    let price = Precise::parse(human_price).ok_or_else(|| {
        StarkExError::invalid_params(format!("humanPrice: not a decimal number: {human_price:?}"))
    })?;
    if price.is_negative() {
        return Err(StarkExError::invalid_params(format!(
            "humanPrice: must not be negative: {human_price}"
        )));
    }

    price
        .shift(ORACLE_PRICE_DECIMALS as i32)
        .ok_or_else(|| {
            StarkExError::invalid_params(format!("humanPrice: out of range: {human_price}"))
        })?
        .to_integer(Rounding::Floor)
        .map(|p| p.to_string())
        .ok_or_else(|| StarkExError::invalid_params("humanPrice could not be rounded"))
}
