//! Crypto backend selection
//!
//! Every hash, signature and public key goes through a [`CryptoBackend`]. The
//! portable backend is pure Rust; the native backend calls StarkWare's crypto-cpp
//! library, which is loaded the first time it is used.

use super::curve::{self, StarkSignature};
use super::native;
use crate::errors::{StarkExError, StarkExResult};
use serde::{Deserialize, Serialize};
use starknet_crypto::pedersen_hash;
use starknet_types_core::felt::Felt;

/// 암호화 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CryptoBackend {
    /// starknet-crypto (순수 Rust)
    #[default]
    Portable,
    /// StarkWare crypto-cpp (동적 로딩)
    Native,
}

impl CryptoBackend {
    pub fn name(&self) -> &'static str {
        match self {
            CryptoBackend::Portable => "portable",
            CryptoBackend::Native => "crypto-cpp",
        }
    }

    /// Whether the backend can be used on this platform. Loads the native library.
    pub fn is_available(&self) -> bool {
        match self {
            CryptoBackend::Portable => true,
            CryptoBackend::Native => native::load().is_ok(),
        }
    }

    /// Pedersen 쌍 해시
    pub fn pedersen(&self, a: &Felt, b: &Felt) -> StarkExResult<Felt> {
        match self {
            CryptoBackend::Portable => Ok(pedersen_hash(a, b)),
            CryptoBackend::Native => native::pedersen(a, b),
        }
    }

    /// 필드 원소 체인 해시: `pedersen(...pedersen(pedersen(e0, e1), e2)..., en)`
    pub fn hash_chain(&self, elements: &[Felt]) -> StarkExResult<Felt> {
        let (first, rest) = elements
            .split_first()
            .ok_or_else(|| StarkExError::invalid_params("cannot hash an empty chain"))?;

        rest.iter()
            .try_fold(*first, |acc, element| self.pedersen(&acc, element))
    }

    /// 메시지 해시에 서명
    pub fn sign(&self, private_key: &Felt, message_hash: &Felt, k: &Felt) -> StarkExResult<StarkSignature> {
        match self {
            CryptoBackend::Portable => curve::sign_hash(private_key, message_hash, k),
            CryptoBackend::Native => native::sign(private_key, message_hash, k),
        }
    }

    /// 서명 검증
    pub fn verify(
        &self,
        public_key: &Felt,
        message_hash: &Felt,
        signature: &StarkSignature,
    ) -> StarkExResult<bool> {
        match self {
            CryptoBackend::Portable => Ok(curve::verify_signature(public_key, message_hash, signature)),
            CryptoBackend::Native => native::verify(public_key, message_hash, signature),
        }
    }

    /// 공개키 x 좌표 파생
    pub fn public_key(&self, private_key: &Felt) -> StarkExResult<Felt> {
        match self {
            CryptoBackend::Portable => Ok(curve::get_public_key(private_key)),
            CryptoBackend::Native => native::get_public_key(private_key),
        }
    }
}

impl std::fmt::Display for CryptoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
