//! STARK Cryptographic Utilities
//!
//! 이 모듈은 StarkEx 메시지 해싱 및 서명을 위한 암호화 기능을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `backend`: 해시/서명 백엔드 선택 (portable, crypto-cpp)
//! - `curve`: STARK 곡선 ECDSA, 서명 직렬화
//! - `keys`: STARK 키 쌍
//! - `keccak`: Keccak256 (등록, 조건부 이체)
//! - `native`: crypto-cpp 동적 로딩 (`crypto-cpp` feature)
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use starkex_signer::crypto::{CryptoBackend, StarkKeyPair};
//!
//! let keys = StarkKeyPair::from_hex("0x...")?;
//! let backend = CryptoBackend::Portable;
//! let hash = backend.hash_chain(&elements)?;
//! ```

mod backend;
pub mod curve;
mod keccak;
mod keys;
pub mod native;

pub use backend::CryptoBackend;
pub use curve::{
    generate_k, get_public_key, get_public_key_y, invert_mod_order, sign_hash, verify_signature,
    StarkSignature, EC_ORDER,
};
pub use keccak::{keccak256, keccak256_concat};
pub use keys::StarkKeyPair;
