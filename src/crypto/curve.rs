//! STARK Curve Operations
//!
//! STARK 곡선 ECDSA 서명/검증 및 서명 직렬화를 제공합니다.
//!
//! # 참조
//!
//! - [StarkEx ECDSA](https://docs.starkware.co/starkex/crypto/stark-curve.html)

use crate::constants::{EC_ORDER_BYTES, GENERATOR_X_HEX, GENERATOR_Y_HEX};
use crate::errors::{StarkExError, StarkExResult};
use crate::utils::felt::{biguint_to_bytes32, felt_to_biguint, felt_to_hex32, strip_hex_prefix};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use starknet_crypto::{get_public_key as stark_get_public_key, rfc6979_generate_k, sign, verify};
use starknet_types_core::curve::ProjectivePoint;
use starknet_types_core::felt::Felt;

/// 곡선 위수 n
pub static EC_ORDER: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&EC_ORDER_BYTES));

/// Hex length of a serialized `r ‖ s` signature
pub const SIGNATURE_HEX_LENGTH: usize = 128;
/// Hex length of a serialized `r ‖ s ‖ y` signature
pub const SIGNATURE_WITH_Y_HEX_LENGTH: usize = 192;

/// STARK 서명
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarkSignature {
    /// r 값
    pub r: Felt,
    /// s 값
    pub s: Felt,
}

impl StarkSignature {
    /// 새 서명 생성
    pub fn new(r: Felt, s: Felt) -> Self {
        Self { r, s }
    }

    /// `(r, w)` 쌍에서 서명 생성 (`s = w⁻¹ mod n`)
    pub fn from_r_w(r: Felt, w: Felt) -> StarkExResult<Self> {
        Ok(Self {
            r,
            s: invert_mod_order(&w)?,
        })
    }

    /// `w = s⁻¹ mod n`
    pub fn w(&self) -> StarkExResult<Felt> {
        invert_mod_order(&self.s)
    }

    /// 128자리 16진수로 직렬화 (r ‖ s, big-endian, 접두사 없음)
    pub fn serialize(&self) -> String {
        format!("{}{}", felt_to_hex32(&self.r), felt_to_hex32(&self.s))
    }

    /// 128자리 16진수에서 역직렬화 (`0x` 선택)
    pub fn deserialize(signature: &str) -> StarkExResult<Self> {
        let bytes = decode_fixed(signature, SIGNATURE_HEX_LENGTH)?;
        Ok(Self {
            r: scalar_from_slice("r", &bytes[..32])?,
            s: scalar_from_slice("s", &bytes[32..64])?,
        })
    }

    /// 공개키 y 좌표를 포함하여 직렬화: `0x` + hex(((r << 256) | s) << 256 | y)
    pub fn serialize_with_y(&self, public_key_y: &Felt) -> String {
        format!(
            "0x{}{}{}",
            felt_to_hex32(&self.r),
            felt_to_hex32(&self.s),
            felt_to_hex32(public_key_y)
        )
    }

    /// 192자리 16진수에서 서명과 y 좌표 역직렬화
    pub fn deserialize_with_y(signature: &str) -> StarkExResult<(Self, Felt)> {
        let bytes = decode_fixed(signature, SIGNATURE_WITH_Y_HEX_LENGTH)?;
        let y = BigUint::from_bytes_be(&bytes[64..96]);
        let y = Felt::from_bytes_be(&biguint_to_bytes32("y", &y)?);
        Ok((
            Self {
                r: scalar_from_slice("r", &bytes[..32])?,
                s: scalar_from_slice("s", &bytes[32..64])?,
            },
            y,
        ))
    }
}

fn decode_fixed(signature: &str, hex_length: usize) -> StarkExResult<Vec<u8>> {
    let digits = strip_hex_prefix(signature.trim());
    if digits.len() != hex_length {
        return Err(StarkExError::invalid_params(format!(
            "Signature must be {hex_length} hex characters, got {}",
            digits.len()
        )));
    }
    hex::decode(digits)
        .map_err(|e| StarkExError::invalid_params(format!("Invalid signature hex: {e}")))
}

/// r, s must lie in [0, n)
fn scalar_from_slice(field: &str, bytes: &[u8]) -> StarkExResult<Felt> {
    let value = BigUint::from_bytes_be(bytes);
    if value >= *EC_ORDER {
        return Err(StarkExError::invalid_params(format!(
            "Signature component {field} is not below the curve order"
        )));
    }
    Ok(Felt::from_bytes_be(&biguint_to_bytes32(field, &value)?))
}

/// n을 법으로 하는 역원 (n은 소수이므로 `x^(n-2)`)
pub fn invert_mod_order(value: &Felt) -> StarkExResult<Felt> {
    let value = felt_to_biguint(value) % &*EC_ORDER;
    if value.is_zero() {
        return Err(StarkExError::InvalidSignature {
            message: "zero has no inverse modulo the curve order".into(),
        });
    }
    let exponent = &*EC_ORDER - BigUint::from(2u8);
    let inverse = value.modpow(&exponent, &EC_ORDER);
    Ok(Felt::from_bytes_be(&biguint_to_bytes32("inverse", &inverse)?))
}

/// RFC 6979 결정적 k 생성
pub fn generate_k(private_key: &Felt, message_hash: &Felt) -> Felt {
    rfc6979_generate_k(message_hash, private_key, None)
}

/// 메시지 해시에 서명: `r = (k·G).x`, `s = k⁻¹·(hash + r·d) mod n`
pub fn sign_hash(private_key: &Felt, message_hash: &Felt, k: &Felt) -> StarkExResult<StarkSignature> {
    let signature = sign(private_key, message_hash, k).map_err(|e| StarkExError::InvalidSignature {
        message: format!("STARK signing failed: {e:?}"),
    })?;

    Ok(StarkSignature {
        r: signature.r,
        s: signature.s,
    })
}

/// 서명 검증
///
/// The public key is assumed to be on the curve. Out-of-range inputs verify as false.
pub fn verify_signature(public_key: &Felt, message_hash: &Felt, signature: &StarkSignature) -> bool {
    match verify(public_key, message_hash, &signature.r, &signature.s) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::trace!(error = ?e, "signature rejected by verifier");
            false
        },
    }
}

/// 개인키에서 공개키 x 좌표 파생 (partial public key)
pub fn get_public_key(private_key: &Felt) -> Felt {
    stark_get_public_key(private_key)
}

/// 개인키에서 공개키 y 좌표 파생
pub fn get_public_key_y(private_key: &Felt) -> StarkExResult<Felt> {
    let invalid = |message: String| StarkExError::InvalidPrivateKey { message };

    let generator = ProjectivePoint::from_affine(
        Felt::from_hex_unchecked(GENERATOR_X_HEX),
        Felt::from_hex_unchecked(GENERATOR_Y_HEX),
    )
    .map_err(|e| invalid(format!("generator is not on the curve: {e:?}")))?;

    let point = (&generator * *private_key)
        .to_affine()
        .map_err(|e| invalid(format!("public key is the point at infinity: {e:?}")))?;
    Ok(point.y())
}

/// 개인키 범위 검사: 1 <= d < n
pub fn check_private_key(private_key: &Felt) -> StarkExResult<()> {
    let value = felt_to_biguint(private_key);
    if value < BigUint::one() || value >= *EC_ORDER {
        return Err(StarkExError::InvalidPrivateKey {
            message: "private key must be in [1, n)".into(),
        });
    }
    Ok(())
}
