//! Limit order normalisation and encoding

use super::encoding::{
    hex_element, pack_word, ASSET_ID_COLLATERAL_BITS, ASSET_ID_FEE_BITS, ASSET_ID_SYNTHETIC_BITS,
    ORDER_WORD_AMOUNTS, ORDER_WORD_POSITIONS,
};
use crate::errors::StarkExResult;
use crate::helpers::{get_starkware_limit_fee_amount, resolve_nonce};
use crate::types::{AssetRegistry, NetworkId, OrderParams, StarkwareOrder, StarkwareOrderType};
use crate::utils::{add_order_expiration_buffer_hours, dec_to_biguint, iso_timestamp_to_epoch_hours};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;

impl StarkwareOrder {
    /// 사람이 읽는 주문 파라미터를 StarkEx 주문으로 변환
    ///
    /// The fee asset is the collateral asset. The expiration is rounded up to whole
    /// hours, then extended by the settlement buffer. Values wider than their packed
    /// field fail here with `FieldOverflow`.
    pub fn from_params(
        params: &OrderParams,
        network_id: NetworkId,
        registry: &AssetRegistry,
    ) -> StarkExResult<Self> {
        let amounts = registry.get_starkware_amounts(&params.amounts, network_id)?;
        let quantums_amount_fee =
            get_starkware_limit_fee_amount(&params.limit_fee, &amounts.quantums_amount_collateral)?;
        let nonce = resolve_nonce(params.client_id.as_deref(), params.nonce.as_deref())?;
        let expiration_epoch_hours = add_order_expiration_buffer_hours(iso_timestamp_to_epoch_hours(
            &params.expiration_iso_timestamp,
        )?);

        let order = Self {
            order_type: StarkwareOrderType::LimitOrderWithFees,
            asset_id_fee: amounts.asset_id_collateral.clone(),
            amounts,
            quantums_amount_fee,
            position_id: params.position_id.clone(),
            nonce,
            expiration_epoch_hours,
        };
        order.field_elements()?;
        Ok(order)
    }

    /// `[assetIdSell, assetIdBuy, assetIdFee, amounts word, positions word]`
    pub(crate) fn field_elements(&self) -> StarkExResult<Vec<Felt>> {
        let amounts = &self.amounts;
        let quantums_synthetic =
            dec_to_biguint("quantumsAmountSynthetic", &amounts.quantums_amount_synthetic)?;
        let quantums_collateral =
            dec_to_biguint("quantumsAmountCollateral", &amounts.quantums_amount_collateral)?;

        let synthetic_id = hex_element(
            "assetIdSynthetic",
            &amounts.asset_id_synthetic,
            ASSET_ID_SYNTHETIC_BITS,
        )?;
        let collateral_id = hex_element(
            "assetIdCollateral",
            &amounts.asset_id_collateral,
            ASSET_ID_COLLATERAL_BITS,
        )?;

        let (asset_id_sell, asset_id_buy, amount_sell, amount_buy) = if amounts.is_buying_synthetic {
            (collateral_id, synthetic_id, quantums_collateral, quantums_synthetic)
        } else {
            (synthetic_id, collateral_id, quantums_synthetic, quantums_collateral)
        };

        let asset_id_fee = hex_element("assetIdFee", &self.asset_id_fee, ASSET_ID_FEE_BITS)?;
        let amount_fee = dec_to_biguint("quantumsAmountFee", &self.quantums_amount_fee)?;
        let nonce = dec_to_biguint("nonce", &self.nonce)?;
        let position_id = dec_to_biguint("positionId", &self.position_id)?;

        let amounts_word = pack_word(&ORDER_WORD_AMOUNTS, &[amount_sell, amount_buy, amount_fee, nonce])?;
        let positions_word = pack_word(
            &ORDER_WORD_POSITIONS,
            &[
                BigUint::from(self.order_type.prefix()),
                position_id.clone(),
                position_id.clone(),
                position_id,
                BigUint::from(self.expiration_epoch_hours),
            ],
        )?;

        Ok(vec![asset_id_sell, asset_id_buy, asset_id_fee, amounts_word, positions_word])
    }
}
