//! Oracle price normalisation and encoding

use super::encoding::{hex_element, pack_word, ORACLE_PRICE_WORD, SIGNED_ASSET_ID_BITS};
use crate::errors::StarkExResult;
use crate::helpers::{get_signed_asset_id, get_signed_asset_name, get_signed_price};
use crate::types::{OraclePriceParams, StarkwareOraclePrice};
use crate::utils::{dec_to_biguint, iso_timestamp_to_epoch_seconds};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;

impl StarkwareOraclePrice {
    /// 오라클 가격 파라미터 변환
    pub fn from_params(params: &OraclePriceParams) -> StarkExResult<Self> {
        let asset_name = get_signed_asset_name(&params.asset);
        let price = Self {
            signed_asset_id: get_signed_asset_id(&asset_name, &params.oracle_name)?,
            signed_price: get_signed_price(&params.human_price)?,
            expiration_epoch_seconds: iso_timestamp_to_epoch_seconds(&params.iso_timestamp)?,
        };
        price.field_elements()?;
        Ok(price)
    }

    /// `[signedAssetId, price ‖ timestamp]`
    pub(crate) fn field_elements(&self) -> StarkExResult<Vec<Felt>> {
        let signed_asset_id = hex_element("signedAssetId", &self.signed_asset_id, SIGNED_ASSET_ID_BITS)?;
        let price_word = pack_word(
            &ORACLE_PRICE_WORD,
            &[
                dec_to_biguint("signedPrice", &self.signed_price)?,
                BigUint::from(self.expiration_epoch_seconds),
            ],
        )?;
        Ok(vec![signed_asset_id, price_word])
    }
}
