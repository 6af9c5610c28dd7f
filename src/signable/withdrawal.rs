//! Withdrawal-to-address normalisation and encoding

use super::encoding::{
    hex_element, pack_word, ASSET_ID_COLLATERAL_BITS, ETH_ADDRESS_BITS, WITHDRAWAL_TO_ADDRESS_PREFIX,
    WITHDRAWAL_WORD,
};
use crate::errors::StarkExResult;
use crate::helpers::resolve_nonce;
use crate::types::{AssetRegistry, NetworkId, StarkwareWithdrawal, WithdrawalParams};
use crate::utils::{dec_to_biguint, iso_timestamp_to_epoch_hours};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;

impl StarkwareWithdrawal {
    /// 출금 파라미터를 StarkEx 출금으로 변환
    pub fn from_params(
        params: &WithdrawalParams,
        network_id: NetworkId,
        registry: &AssetRegistry,
    ) -> StarkExResult<Self> {
        let withdrawal = Self {
            position_id: params.position_id.clone(),
            asset_id_collateral: registry.collateral_asset_id(network_id)?.to_string(),
            quantums_amount: registry
                .to_quantums_exact(&params.human_amount, registry.collateral_asset())?,
            nonce: resolve_nonce(params.client_id.as_deref(), params.nonce.as_deref())?,
            expiration_epoch_hours: iso_timestamp_to_epoch_hours(&params.expiration_iso_timestamp)?,
            eth_address: params.eth_address.clone(),
        };
        withdrawal.field_elements()?;
        Ok(withdrawal)
    }

    /// `[assetIdCollateral, ethAddress, packed word]`
    pub(crate) fn field_elements(&self) -> StarkExResult<Vec<Felt>> {
        let asset_id = hex_element(
            "assetIdCollateral",
            &self.asset_id_collateral,
            ASSET_ID_COLLATERAL_BITS,
        )?;
        let eth_address = hex_element("ethAddress", &self.eth_address, ETH_ADDRESS_BITS)?;

        let word = pack_word(
            &WITHDRAWAL_WORD,
            &[
                BigUint::from(WITHDRAWAL_TO_ADDRESS_PREFIX),
                dec_to_biguint("positionId", &self.position_id)?,
                dec_to_biguint("nonce", &self.nonce)?,
                dec_to_biguint("quantumsAmount", &self.quantums_amount)?,
                BigUint::from(self.expiration_epoch_hours),
            ],
        )?;

        Ok(vec![asset_id, eth_address, word])
    }
}
