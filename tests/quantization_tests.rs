//! Integration tests for quantum conversion
//!
//! Order amounts, limit fees, nonces and oracle prices through the public API.

use starkex_signer::helpers::{
    fact_to_condition, from_quantums, get_signed_asset_id, get_signed_price,
    get_starkware_amounts, get_starkware_limit_fee_amount, nonce_from_client_id, resolve_nonce,
    to_quantums_exact, to_quantums_round_down, to_quantums_round_up,
};
use starkex_signer::{AssetRegistry, NetworkId, OrderAmountParams, OrderSide, StarkExError};

// === Order Amounts ===

#[test]
fn test_buy_order_amounts_round_collateral_up() {
    let params = OrderAmountParams::with_price("ETH-USD", OrderSide::Buy, "145.0005", "350.00067");
    let amounts = get_starkware_amounts(&params, NetworkId::Goerli).unwrap();

    assert_eq!(amounts.quantums_amount_synthetic, "14500050000");
    assert_eq!(amounts.quantums_amount_collateral, "50750272151");
    assert!(amounts.is_buying_synthetic);
}

#[test]
fn test_sell_order_amounts_round_collateral_down() {
    let params = OrderAmountParams::with_price("ETH-USD", OrderSide::Sell, "145.0005", "350.00067");
    let amounts = get_starkware_amounts(&params, NetworkId::Goerli).unwrap();

    assert_eq!(amounts.quantums_amount_synthetic, "14500050000");
    assert_eq!(amounts.quantums_amount_collateral, "50750272150");
    assert!(!amounts.is_buying_synthetic);
}

#[test]
fn test_order_amounts_use_network_collateral() {
    let params = OrderAmountParams::with_price("ETH-USD", OrderSide::Buy, "1", "1");
    let registry = AssetRegistry::global();

    let mainnet = get_starkware_amounts(&params, NetworkId::Mainnet).unwrap();
    let goerli = get_starkware_amounts(&params, NetworkId::Goerli).unwrap();

    assert_eq!(
        mainnet.asset_id_collateral,
        registry.collateral_asset_id(NetworkId::Mainnet).unwrap()
    );
    assert_eq!(
        goerli.asset_id_collateral,
        registry.collateral_asset_id(NetworkId::Goerli).unwrap()
    );
    assert_ne!(mainnet.asset_id_collateral, goerli.asset_id_collateral);
    assert_eq!(mainnet.asset_id_synthetic, goerli.asset_id_synthetic);
}

#[test]
fn test_order_amounts_require_one_collateral_source() {
    let mut params = OrderAmountParams::with_price("ETH-USD", OrderSide::Buy, "1", "1");
    params.human_quote_amount = Some("1".into());
    let err = get_starkware_amounts(&params, NetworkId::Goerli).unwrap_err();
    assert!(err.is_input_error());

    params.human_price = None;
    params.human_quote_amount = None;
    let err = get_starkware_amounts(&params, NetworkId::Goerli).unwrap_err();
    assert!(matches!(err, StarkExError::InvalidParams { .. }));
}

#[test]
fn test_order_size_must_be_exact() {
    // ETH has 8 decimals
    let params = OrderAmountParams::with_price("ETH-USD", OrderSide::Buy, "0.000000001", "1");
    let err = get_starkware_amounts(&params, NetworkId::Goerli).unwrap_err();
    assert_eq!(err.code(), "NOT_A_MULTIPLE_OF_QUANTUM");
}

#[test]
fn test_unknown_market() {
    let params = OrderAmountParams::with_price("DOGE-USD", OrderSide::Buy, "1", "1");
    let err = get_starkware_amounts(&params, NetworkId::Goerli).unwrap_err();
    assert!(err.is_input_error());
}

// === Limit Fee ===

#[test]
fn test_limit_fee_rounds_up() {
    assert_eq!(
        get_starkware_limit_fee_amount("0.125", "50750272151").unwrap(),
        "6343784019"
    );
    assert_eq!(
        get_starkware_limit_fee_amount("0.0000019999999999999999", "50750272151").unwrap(),
        "101501"
    );
}

#[test]
fn test_limit_fee_exact_and_zero() {
    assert_eq!(get_starkware_limit_fee_amount("0.5", "1000").unwrap(), "500");
    assert_eq!(get_starkware_limit_fee_amount("0", "1000").unwrap(), "0");
    assert_eq!(get_starkware_limit_fee_amount("0.001", "0").unwrap(), "0");
}

#[test]
fn test_limit_fee_rejects_bad_input() {
    assert!(get_starkware_limit_fee_amount("-0.1", "1000").is_err());
    assert!(get_starkware_limit_fee_amount("0.1", "12.5").is_err());
}

// === Direct Conversions ===

#[test]
fn test_rounding_modes_agree_on_exact_amounts() {
    for amount in ["0", "1", "0.00000001", "145.0005", "21000000"] {
        let exact = to_quantums_exact(amount, "ETH").unwrap();
        assert_eq!(to_quantums_round_down(amount, "ETH").unwrap(), exact);
        assert_eq!(to_quantums_round_up(amount, "ETH").unwrap(), exact);
    }
}

#[test]
fn test_from_quantums_inverts_exact_conversion() {
    let quantums = to_quantums_exact("145.0005", "ETH").unwrap();
    assert_eq!(from_quantums(&quantums, "ETH").unwrap(), "145.0005");
}

// === Nonce ===

#[test]
fn test_nonce_sources() {
    let from_client = resolve_nonce(Some("my client id"), None).unwrap();
    assert_eq!(from_client, nonce_from_client_id("my client id"));
    assert_eq!(resolve_nonce(None, Some("42")).unwrap(), "42");

    assert!(resolve_nonce(None, None).is_err());
    assert!(resolve_nonce(Some("a"), Some("1")).is_err());
}

#[test]
fn test_nonce_fits_in_32_bits() {
    for client_id in ["", "a", "order-1", "🙂 unicode"] {
        let nonce: u64 = nonce_from_client_id(client_id).parse().unwrap();
        assert!(nonce < 1 << 32);
    }
}

// === Conditions and Oracle Prices ===

#[test]
fn test_condition_is_250_bits() {
    let condition = fact_to_condition(
        "0x12aa12aa12aa12aa12aa12aa12aa12aa12aa12aa",
        "0x12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff",
    )
    .unwrap();
    let value = num_bigint::BigUint::parse_bytes(condition.as_bytes(), 16).unwrap();
    assert!(value.bits() <= 250);
}

#[test]
fn test_oracle_helpers() {
    assert_eq!(
        get_signed_asset_id("BTCUSD", "Maker").unwrap(),
        "425443555344000000000000000000004d616b6572"
    );
    assert_eq!(get_signed_price("1").unwrap(), "1000000000000000000");
}
