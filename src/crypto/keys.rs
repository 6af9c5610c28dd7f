//! STARK key pair

use super::backend::CryptoBackend;
use super::curve::{check_private_key, get_public_key_y};
use crate::errors::{StarkExError, StarkExResult};
use crate::utils::felt::{felt_to_hex, hex_to_fixed_bytes};
use starknet_types_core::felt::Felt;

/// STARK 키 쌍
///
/// `public_key` is the x coordinate (the partial public key that identifies a user).
/// The y coordinate is only needed to serialize registration signatures.
#[derive(Clone)]
pub struct StarkKeyPair {
    private_key: Felt,
    public_key: Felt,
    public_key_y: Option<Felt>,
}

impl StarkKeyPair {
    /// 개인키로 키 쌍 생성 (portable 백엔드)
    pub fn from_private_key(private_key: Felt) -> StarkExResult<Self> {
        Self::from_private_key_with_backend(private_key, CryptoBackend::Portable)
    }

    /// 개인키로 키 쌍 생성 (백엔드 지정)
    pub fn from_private_key_with_backend(private_key: Felt, backend: CryptoBackend) -> StarkExResult<Self> {
        check_private_key(&private_key)?;
        let public_key = backend.public_key(&private_key)?;
        let public_key_y = get_public_key_y(&private_key)?;

        Ok(Self {
            private_key,
            public_key,
            public_key_y: Some(public_key_y),
        })
    }

    /// 16진수 개인키로 키 쌍 생성
    pub fn from_hex(private_key_hex: &str) -> StarkExResult<Self> {
        let bytes = hex_to_fixed_bytes::<32>("privateKey", private_key_hex).map_err(|e| {
            StarkExError::InvalidPrivateKey {
                message: e.to_string(),
            }
        })?;
        Self::from_private_key(Felt::from_bytes_be(&bytes))
    }

    /// 외부에서 받은 값으로 키 쌍 구성 (y 좌표 선택)
    ///
    /// The public key is not checked against the private key.
    pub fn from_parts(private_key: Felt, public_key: Felt, public_key_y: Option<Felt>) -> StarkExResult<Self> {
        check_private_key(&private_key)?;
        Ok(Self {
            private_key,
            public_key,
            public_key_y,
        })
    }

    pub fn private_key(&self) -> &Felt {
        &self.private_key
    }

    pub fn public_key(&self) -> &Felt {
        &self.public_key
    }

    pub fn public_key_y(&self) -> Option<&Felt> {
        self.public_key_y.as_ref()
    }

    /// 공개키 16진수 반환
    pub fn public_key_hex(&self) -> String {
        felt_to_hex(&self.public_key)
    }
}

impl std::fmt::Debug for StarkKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarkKeyPair")
            .field("public_key", &self.public_key_hex())
            .field("has_public_key_y", &self.public_key_y.is_some())
            .finish_non_exhaustive()
    }
}
