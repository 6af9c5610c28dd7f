//! Hex and field element conversions

use crate::errors::{StarkExError, StarkExResult};
use num_bigint::BigUint;
use num_traits::Num;
use starknet_types_core::felt::Felt;

/// Bit width of a value that is guaranteed to be below the field modulus
pub const FIELD_ELEMENT_BITS: u64 = 251;

/// `0x` 접두사 제거
pub fn strip_hex_prefix(hex_str: &str) -> &str {
    hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str)
}

/// 16진수 문자열을 BigUint로 파싱 (`0x` 선택)
pub fn hex_to_biguint(field: &str, hex_str: &str) -> StarkExResult<BigUint> {
    let digits = strip_hex_prefix(hex_str.trim());
    if digits.is_empty() {
        return Err(StarkExError::invalid_params(format!("{field}: empty hex value")));
    }
    BigUint::from_str_radix(digits, 16)
        .map_err(|e| StarkExError::invalid_params(format!("{field}: invalid hex {hex_str}: {e}")))
}

/// 10진수 문자열을 BigUint로 파싱
pub fn dec_to_biguint(field: &str, dec_str: &str) -> StarkExResult<BigUint> {
    let digits = dec_str.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(StarkExError::invalid_params(format!(
            "{field}: expected a base-10 integer, got {dec_str:?}"
        )));
    }
    BigUint::from_str_radix(digits, 10)
        .map_err(|e| StarkExError::invalid_params(format!("{field}: {e}")))
}

/// 16진수 문자열을 고정 길이 바이트 배열로 파싱 (왼쪽 0 패딩)
///
/// 홀수 길이 입력은 앞에 0을 붙여 해석합니다.
pub fn hex_to_fixed_bytes<const N: usize>(field: &str, hex_str: &str) -> StarkExResult<[u8; N]> {
    let digits = strip_hex_prefix(hex_str.trim());
    let digits = if digits.len() % 2 != 0 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    let bytes = hex::decode(&digits)
        .map_err(|e| StarkExError::invalid_params(format!("{field}: invalid hex: {e}")))?;

    if bytes.len() > N {
        return Err(StarkExError::invalid_params(format!(
            "{field}: value too large: {} bytes, max {N}",
            bytes.len()
        )));
    }

    let mut result = [0u8; N];
    result[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(result)
}

/// BigUint를 32바이트 big-endian 배열로 변환
pub fn biguint_to_bytes32(field: &str, value: &BigUint) -> StarkExResult<[u8; 32]> {
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(StarkExError::FieldOverflow {
            field: field.to_string(),
            max_bits: 256,
            actual_bits: value.bits(),
        });
    }
    let mut result = [0u8; 32];
    result[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(result)
}

/// BigUint를 Felt로 변환 (251비트 초과시 오류)
pub fn biguint_to_felt(field: &str, value: &BigUint) -> StarkExResult<Felt> {
    if value.bits() > FIELD_ELEMENT_BITS {
        return Err(StarkExError::FieldOverflow {
            field: field.to_string(),
            max_bits: FIELD_ELEMENT_BITS,
            actual_bits: value.bits(),
        });
    }
    Ok(Felt::from_bytes_be(&biguint_to_bytes32(field, value)?))
}

/// Felt를 BigUint로 변환
pub fn felt_to_biguint(felt: &Felt) -> BigUint {
    BigUint::from_bytes_be(&felt.to_bytes_be())
}

/// 16진수 문자열을 Felt로 변환
pub fn hex_to_felt(field: &str, hex_str: &str) -> StarkExResult<Felt> {
    biguint_to_felt(field, &hex_to_biguint(field, hex_str)?)
}

/// Felt를 64자리 16진수 문자열로 변환 (접두사 없음)
pub fn felt_to_hex32(felt: &Felt) -> String {
    hex::encode(felt.to_bytes_be())
}

/// Felt를 최소 길이 16진수 문자열로 변환 (`0x` 포함)
pub fn felt_to_hex(felt: &Felt) -> String {
    format!("0x{}", felt_to_biguint(felt).to_str_radix(16))
}
