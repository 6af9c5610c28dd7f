//! Utility functions

pub mod felt;
pub mod precise;
pub mod time;

pub use felt::{
    biguint_to_felt, dec_to_biguint, felt_to_biguint, felt_to_hex, felt_to_hex32,
    hex_to_biguint, hex_to_felt, strip_hex_prefix,
};
pub use precise::{Precise, Rounding, MAX_DECIMALS};
pub use time::{
    add_order_expiration_buffer_hours, epoch_ms_to_epoch_hours, iso_timestamp_to_epoch_hours,
    iso_timestamp_to_epoch_seconds,
};
