//! Conditional transfer condition

use crate::crypto::keccak256_concat;
use crate::errors::StarkExResult;
use crate::utils::felt::hex_to_fixed_bytes;
use num_bigint::BigUint;
use num_traits::One;

/// Conditions are truncated to this many bits
pub const CONDITION_BIT_LENGTH: u64 = 250;

/// Fact registry 주소와 fact로부터 condition 계산 (16진수, 접두사 없음)
///
/// `keccak256(address ‖ fact) & (2^250 - 1)`
pub fn fact_to_condition(fact_registry_address: &str, fact: &str) -> StarkExResult<String> {
    let address = hex_to_fixed_bytes::<20>("factRegistryAddress", fact_registry_address)?;
    let fact = hex_to_fixed_bytes::<32>("fact", fact)?;

    let digest = keccak256_concat(&[&address, &fact]);
    let mask = (BigUint::one() << CONDITION_BIT_LENGTH) - BigUint::one();
    Ok((BigUint::from_bytes_be(&digest) & mask).to_str_radix(16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_fits_250_bits() {
        let condition = fact_to_condition(
            "0x12aa12aa12aa12aa12aa12aa12aa12aa12aa12aa",
            "0x12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff",
        )
        .unwrap();
        let value = BigUint::parse_bytes(condition.as_bytes(), 16).unwrap();
        assert!(value.bits() <= CONDITION_BIT_LENGTH);
    }

    #[test]
    fn test_condition_is_keccak_of_packed_inputs() {
        let address = [0x11u8; 20];
        let fact = [0x22u8; 32];
        let digest = keccak256_concat(&[&address, &fact]);
        let mut expected = BigUint::from_bytes_be(&digest);
        expected &= (BigUint::one() << CONDITION_BIT_LENGTH) - BigUint::one();

        let condition =
            fact_to_condition(&hex::encode(address), &format!("0x{}", hex::encode(fact))).unwrap();
        assert_eq!(condition, expected.to_str_radix(16));
    }

    #[test]
    fn test_condition_rejects_long_address() {
        let err = fact_to_condition(&"ab".repeat(21), "0x01").unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");
    }
}
