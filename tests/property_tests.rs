//! Property-based tests for quantization and signing
//!
//! These tests use proptest to check:
//! - Exact conversions are invertible
//! - A price and the equivalent quote amount give identical order amounts
//! - The limit fee is the smallest bound not below the requested fraction
//! - Nonces are deterministic and fit in 32 bits
//! - Signatures verify under the signing key only

use proptest::prelude::*;
use starkex_signer::crypto::{generate_k, get_public_key, sign_hash, verify_signature};
use starkex_signer::helpers::{
    from_quantums, get_starkware_amounts, get_starkware_limit_fee_amount, nonce_from_client_id,
    to_quantums_exact,
};
use starkex_signer::{NetworkId, OrderAmountParams, OrderSide};
use starknet_types_core::felt::Felt;

/// Strategy for assets with their resolutions
fn asset_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USDT"), Just("BTC"), Just("ETH"), Just("LINK")]
}

fn side_strategy() -> impl Strategy<Value = OrderSide> {
    prop_oneof![Just(OrderSide::Buy), Just(OrderSide::Sell)]
}

/// Strategy for message hashes below 2^251
fn hash_strategy() -> impl Strategy<Value = Felt> {
    prop::array::uniform32(any::<u8>()).prop_map(|mut bytes| {
        bytes[0] &= 0x07;
        Felt::from_bytes_be(&bytes)
    })
}

proptest! {
    #[test]
    fn prop_exact_conversion_round_trips(quantums in any::<u64>(), asset in asset_strategy()) {
        let human = from_quantums(&quantums.to_string(), asset).unwrap();
        let back = to_quantums_exact(&human, asset).unwrap();
        prop_assert_eq!(&back, &quantums.to_string());
        prop_assert_eq!(from_quantums(&back, asset).unwrap(), human);
    }

    #[test]
    fn prop_price_and_quote_amount_agree(
        size in 1u64..10_000,
        price_micros in 1u64..100_000_000_000,
        side in side_strategy(),
    ) {
        // With an integer size and a 6-decimal price, the quote amount is exact in USDT
        let human_size = size.to_string();
        let human_price = from_quantums(&price_micros.to_string(), "USDT").unwrap();
        let human_quote = from_quantums(&(u128::from(size) * u128::from(price_micros)).to_string(), "USDT").unwrap();

        let by_price = get_starkware_amounts(
            &OrderAmountParams::with_price("BTC-USD", side, human_size.clone(), human_price),
            NetworkId::Mainnet,
        ).unwrap();
        let by_quote = get_starkware_amounts(
            &OrderAmountParams::with_quote_amount("BTC-USD", side, human_size, human_quote),
            NetworkId::Mainnet,
        ).unwrap();

        prop_assert_eq!(by_price, by_quote);
    }

    #[test]
    fn prop_buy_collateral_never_below_sell(
        size_quantums in 1u64..1_000_000_000_000,
        price_cents in 1u64..10_000_000,
    ) {
        let human_size = from_quantums(&size_quantums.to_string(), "BTC").unwrap();
        let human_price = from_quantums(&(price_cents * 10_000).to_string(), "USDT").unwrap();

        let buy = get_starkware_amounts(
            &OrderAmountParams::with_price("BTC-USD", OrderSide::Buy, human_size.clone(), human_price.clone()),
            NetworkId::Mainnet,
        ).unwrap();
        let sell = get_starkware_amounts(
            &OrderAmountParams::with_price("BTC-USD", OrderSide::Sell, human_size, human_price),
            NetworkId::Mainnet,
        ).unwrap();

        let buy: u128 = buy.quantums_amount_collateral.parse().unwrap();
        let sell: u128 = sell.quantums_amount_collateral.parse().unwrap();
        prop_assert!(buy == sell || buy == sell + 1);
    }

    #[test]
    fn prop_limit_fee_is_minimal_upper_bound(fee_micros in 0u64..1_000_000, collateral in any::<u64>()) {
        let limit_fee = from_quantums(&fee_micros.to_string(), "USDT").unwrap();
        let fee: u128 = get_starkware_limit_fee_amount(&limit_fee, &collateral.to_string())
            .unwrap()
            .parse()
            .unwrap();

        let target = u128::from(fee_micros) * u128::from(collateral);
        prop_assert!(fee * 1_000_000 >= target);
        prop_assert!(fee == 0 || (fee - 1) * 1_000_000 < target);
    }

    #[test]
    fn prop_nonce_is_deterministic_and_32_bit(client_id in ".{0,64}") {
        let nonce = nonce_from_client_id(&client_id);
        prop_assert_eq!(&nonce, &nonce_from_client_id(&client_id));
        let value: u64 = nonce.parse().unwrap();
        prop_assert!(value < 1 << 32);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_signature_round_trip(private_key in 1u64.., hash in hash_strategy()) {
        let private_key = Felt::from(private_key);
        let public_key = get_public_key(&private_key);
        let k = generate_k(&private_key, &hash);

        let signature = sign_hash(&private_key, &hash, &k).unwrap();
        prop_assert!(verify_signature(&public_key, &hash, &signature));

        let other = get_public_key(&(private_key + Felt::ONE));
        prop_assert!(!verify_signature(&other, &hash, &signature));
    }
}
