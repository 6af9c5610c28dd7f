//! Message helpers
//!
//! - `assets`: human amount ↔ quantum conversion, order amounts, limit fee
//! - `nonce`: nonce derivation from client ids
//! - `condition`: conditional transfer condition from a fact
//! - `oracle`: signed asset id and fixed point price for oracle messages

mod assets;
mod condition;
mod nonce;
mod oracle;

pub use assets::{
    from_quantums, get_starkware_amounts, get_starkware_limit_fee_amount, to_quantums_exact,
    to_quantums_round_down, to_quantums_round_up,
};
pub use condition::{fact_to_condition, CONDITION_BIT_LENGTH};
pub use nonce::{nonce_from_client_id, resolve_nonce};
pub use oracle::{get_signed_asset_id, get_signed_asset_name, get_signed_price};
