//! Nonce derivation from client ids

use crate::constants::NONCE_BIT_LENGTH;
use crate::errors::{StarkExError, StarkExResult};
use crate::utils::dec_to_biguint;
use num_bigint::BigUint;
use num_traits::One;
use sha2::{Digest, Sha256};

/// 클라이언트 ID에서 nonce 파생
///
/// `sha256(client_id) mod 2^32`, returned as a base-10 string.
pub fn nonce_from_client_id(client_id: &str) -> String {
    let digest = Sha256::digest(client_id.as_bytes());
    let modulus = BigUint::one() << NONCE_BIT_LENGTH;
    (BigUint::from_bytes_be(&digest) % modulus).to_string()
}

/// `client_id`와 `nonce` 중 정확히 하나로부터 nonce 결정
///
/// An explicit nonce must fit in [`NONCE_BIT_LENGTH`] bits.
pub fn resolve_nonce(client_id: Option<&str>, nonce: Option<&str>) -> StarkExResult<String> {
    match (client_id, nonce) {
        (Some(client_id), None) => Ok(nonce_from_client_id(client_id)),
        (None, Some(nonce)) => {
            let value = dec_to_biguint("nonce", nonce)?;
            if value.bits() > NONCE_BIT_LENGTH {
                return Err(StarkExError::FieldOverflow {
                    field: "nonce".to_string(),
                    max_bits: NONCE_BIT_LENGTH,
                    actual_bits: value.bits(),
                });
            }
            Ok(value.to_string())
        },
        (Some(_), Some(_)) => Err(StarkExError::invalid_params(
            "Specify exactly one of clientId and nonce, not both",
        )),
        (None, None) => Err(StarkExError::invalid_params(
            "One of clientId or nonce is required",
        )),
    }
}
