//! Keccak256 hashing utilities
//!
//! Ethereum 호환 Keccak256 해시 (등록 메시지, 조건부 이체 condition 계산에 사용)

use sha3::{Digest, Keccak256};

/// 데이터의 Keccak256 해시를 계산합니다.
///
/// # Example
///
/// ```rust
/// use starkex_signer::crypto::keccak256;
///
/// let hash = keccak256(b"hello");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// 여러 데이터 조각을 연결하여 Keccak256 해시를 계산합니다.
///
/// Equivalent to Solidity `keccak256(abi.encodePacked(...))` over the given parts.
pub fn keccak256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
