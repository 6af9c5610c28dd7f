//! StarkEx constants
//!
//! 검증기(verifier)와 일치해야 하는 상수 및 기본 자산 테이블

use crate::types::NetworkId;

// === Default asset table ===

/// 담보 자산 심볼
pub const DEFAULT_COLLATERAL_ASSET: &str = "USDT";

/// (symbol, resolution, synthetic asset id)
///
/// Synthetic asset ids are the ASCII bytes of `"{symbol}-{resolution}"`, right padded
/// to 15 bytes.
pub const DEFAULT_ASSETS: &[(&str, u32, Option<&str>)] = &[
    ("USDT", 6, None),
    ("BTC", 10, Some("0x4254432d3130000000000000000000")),
    ("ETH", 8, Some("0x4554482d3800000000000000000000")),
    ("LINK", 7, Some("0x4c494e4b2d37000000000000000000")),
];

/// (market, synthetic asset)
pub const DEFAULT_MARKETS: &[(&str, &str)] =
    &[("BTC-USD", "BTC"), ("ETH-USD", "ETH"), ("LINK-USD", "LINK")];

/// 네트워크별 담보 자산 ID
pub const DEFAULT_COLLATERAL_ASSET_IDS: &[(NetworkId, &str)] = &[
    (
        NetworkId::Mainnet,
        "0x02893294412a4c8f915f75892b395ebbf6859ec246ec365c3b1f56f47c3a0a5d",
    ),
    (
        NetworkId::Ropsten,
        "0x02c04d8b650f44092278a7cb1e1028c82025dff622db96c934b611b84cc8de5a",
    ),
    (
        NetworkId::Goerli,
        "0x03bda2b4764039f2df44a00a9cf1d1569a83f95406f983f6ea2f2d8e9b0e3cd4",
    ),
];

// === Signing constants ===

/// Hours added to an order expiration to tolerate on-chain settlement delay
pub const ORDER_EXPIRATION_BUFFER_HOURS: u64 = 24 * 7;

/// Bit width of every nonce
pub const NONCE_BIT_LENGTH: u64 = 32;

/// Oracle prices are signed as fixed point with this many decimals
pub const ORACLE_PRICE_DECIMALS: u32 = 18;

/// Registration message prefix
pub const REGISTRATION_PREFIX: &str = "UserRegistration:";

/// Order of the STARK curve generator (big-endian)
pub const EC_ORDER_BYTES: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32, 0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6, 0x4d, 0x2f,
];

/// Registration hashes are reduced modulo this prime (numerically the curve order)
pub const REGISTRATION_HASH_MODULUS: [u8; 32] = EC_ORDER_BYTES;

/// STARK curve generator x coordinate
pub const GENERATOR_X_HEX: &str =
    "0x1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca";

/// STARK curve generator y coordinate
pub const GENERATOR_Y_HEX: &str =
    "0x5668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f";
