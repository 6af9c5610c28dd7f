//! Field element packing
//!
//! Every signed message is a chain of field elements. Multi-field words are built
//! from a fixed layout table: each sub-value is shifted left by the widths of the
//! sub-values that follow it, then a word is padded on the right.

use crate::errors::{StarkExError, StarkExResult};
use crate::utils::felt::{biguint_to_felt, hex_to_biguint};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;

/// 하위 필드 정의 (이름, 비트 폭)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub bits: u64,
}

const fn field(name: &'static str, bits: u64) -> FieldSpec {
    FieldSpec { name, bits }
}

/// 워드 레이아웃 (상위 비트부터 순서대로, 마지막에 패딩)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLayout {
    pub fields: &'static [FieldSpec],
    pub padding_bits: u64,
}

impl WordLayout {
    /// 패딩 포함 전체 비트 수
    pub fn total_bits(&self) -> u64 {
        self.fields.iter().map(|f| f.bits).sum::<u64>() + self.padding_bits
    }
}

// === Standalone field widths ===

pub const ASSET_ID_SYNTHETIC_BITS: u64 = 128;
pub const ASSET_ID_COLLATERAL_BITS: u64 = 250;
pub const ASSET_ID_FEE_BITS: u64 = 250;
pub const PUBLIC_KEY_BITS: u64 = 251;
pub const CONDITION_BITS: u64 = 250;
pub const ETH_ADDRESS_BITS: u64 = 160;
pub const SIGNED_ASSET_ID_BITS: u64 = 168;

// === Message type tags ===

pub const TRANSFER_PREFIX: u64 = 4;
pub const CONDITIONAL_TRANSFER_PREFIX: u64 = 5;
pub const WITHDRAWAL_TO_ADDRESS_PREFIX: u64 = 7;

// === Word layouts ===

pub const ORDER_WORD_AMOUNTS: WordLayout = WordLayout {
    fields: &[
        field("quantumsAmountSell", 64),
        field("quantumsAmountBuy", 64),
        field("quantumsAmountFee", 64),
        field("nonce", 32),
    ],
    padding_bits: 0,
};

pub const ORDER_WORD_POSITIONS: WordLayout = WordLayout {
    fields: &[
        field("orderType", 10),
        field("positionId", 64),
        field("positionId", 64),
        field("positionId", 64),
        field("expirationEpochHours", 32),
    ],
    padding_bits: 17,
};

pub const TRANSFER_WORD_POSITIONS: WordLayout = WordLayout {
    fields: &[
        field("senderPositionId", 64),
        field("receiverPositionId", 64),
        field("feePositionId", 64),
        field("nonce", 32),
    ],
    padding_bits: 0,
};

pub const TRANSFER_WORD_AMOUNTS: WordLayout = WordLayout {
    fields: &[
        field("transferType", 10),
        field("quantumsAmount", 64),
        field("maxAmountFee", 64),
        field("expirationEpochHours", 32),
    ],
    padding_bits: 81,
};

pub const WITHDRAWAL_WORD: WordLayout = WordLayout {
    fields: &[
        field("withdrawalType", 10),
        field("positionId", 64),
        field("nonce", 32),
        field("quantumsAmount", 64),
        field("expirationEpochHours", 32),
    ],
    padding_bits: 49,
};

pub const ORACLE_PRICE_WORD: WordLayout = WordLayout {
    fields: &[field("signedPrice", 120), field("expirationEpochSeconds", 32)],
    padding_bits: 0,
};

/// 비트 폭 검사
pub fn check_bit_length(field: &str, value: &BigUint, max_bits: u64) -> StarkExResult<()> {
    if value.bits() > max_bits {
        return Err(StarkExError::FieldOverflow {
            field: field.to_string(),
            max_bits,
            actual_bits: value.bits(),
        });
    }
    Ok(())
}

/// 단독 필드 원소 (비트 폭 검사 후 변환)
pub fn element(field: &str, value: &BigUint, max_bits: u64) -> StarkExResult<Felt> {
    check_bit_length(field, value, max_bits)?;
    biguint_to_felt(field, value)
}

/// 16진수 단독 필드 원소
pub fn hex_element(field: &str, hex_str: &str, max_bits: u64) -> StarkExResult<Felt> {
    element(field, &hex_to_biguint(field, hex_str)?, max_bits)
}

/// 레이아웃에 따라 값들을 하나의 필드 원소로 패킹
pub fn pack_word(layout: &WordLayout, values: &[BigUint]) -> StarkExResult<Felt> {
    if layout.fields.len() != values.len() {
        return Err(StarkExError::invalid_params(format!(
            "word layout expects {} values, got {}",
            layout.fields.len(),
            values.len()
        )));
    }

    let mut word = BigUint::default();
    for (entry, value) in layout.fields.iter().zip(values) {
        check_bit_length(entry.name, value, entry.bits)?;
        word = (word << entry.bits) + value;
    }
    word <<= layout.padding_bits;

    biguint_to_felt("word", &word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::felt::felt_to_biguint;

    #[test]
    fn test_layouts_fill_one_field_element() {
        for layout in [
            ORDER_WORD_POSITIONS,
            TRANSFER_WORD_AMOUNTS,
            WITHDRAWAL_WORD,
        ] {
            assert_eq!(layout.total_bits(), 251);
        }
        assert_eq!(ORDER_WORD_AMOUNTS.total_bits(), 224);
        assert_eq!(TRANSFER_WORD_POSITIONS.total_bits(), 224);
        assert_eq!(ORACLE_PRICE_WORD.total_bits(), 152);
    }

    #[test]
    fn test_pack_word_shifts_and_pads() {
        const LAYOUT: WordLayout = WordLayout {
            fields: &[field("a", 4), field("b", 8)],
            padding_bits: 2,
        };
        let packed = pack_word(&LAYOUT, &[BigUint::from(0x3u8), BigUint::from(0xabu8)]).unwrap();
        assert_eq!(felt_to_biguint(&packed), BigUint::from(((0x3u32 << 8) | 0xab) << 2));
    }

    #[test]
    fn test_pack_word_overflow() {
        let values = [
            BigUint::from(1u8) << 64,
            BigUint::from(0u8),
            BigUint::from(0u8),
            BigUint::from(0u8),
        ];
        let err = pack_word(&ORDER_WORD_AMOUNTS, &values).unwrap_err();
        match err {
            StarkExError::FieldOverflow { field, max_bits, actual_bits } => {
                assert_eq!(field, "quantumsAmountSell");
                assert_eq!(max_bits, 64);
                assert_eq!(actual_bits, 65);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pack_word_arity() {
        assert_eq!(
            pack_word(&ORACLE_PRICE_WORD, &[BigUint::from(1u8)]).unwrap_err().code(),
            "INVALID_PARAMS"
        );
    }

    #[test]
    fn test_hex_element_width() {
        assert!(hex_element("assetIdSynthetic", "0x4254432d3130000000000000000000", ASSET_ID_SYNTHETIC_BITS).is_ok());
        let too_wide = format!("0x1{}", "0".repeat(32));
        assert_eq!(
            hex_element("assetIdSynthetic", &too_wide, ASSET_ID_SYNTHETIC_BITS).unwrap_err().code(),
            "FIELD_OVERFLOW"
        );
    }
}
