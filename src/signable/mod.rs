//! Signable messages
//!
//! 메시지 종류별 정규화(normalisation), 필드 인코딩, 해싱, 서명
//!
//! - `encoding`: bit layout tables and word packing
//! - `message`: the tagged message variant and its hash chain
//! - `stark_signable`: [`Signable`], the per-message hash cache and sign/verify entry point

pub mod encoding;
mod message;
mod oracle_price;
mod order;
mod registration;
mod stark_signable;
mod transfer;
mod withdrawal;

pub use message::{MessageKind, StarkMessage};
pub use stark_signable::{Signable, SignableState};
