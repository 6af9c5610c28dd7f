//! Transfer and conditional transfer normalisation and encoding

use super::encoding::{
    hex_element, pack_word, ASSET_ID_COLLATERAL_BITS, CONDITIONAL_TRANSFER_PREFIX, CONDITION_BITS,
    PUBLIC_KEY_BITS, TRANSFER_PREFIX, TRANSFER_WORD_AMOUNTS, TRANSFER_WORD_POSITIONS,
};
use crate::errors::StarkExResult;
use crate::helpers::{fact_to_condition, nonce_from_client_id};
use crate::types::{
    AssetRegistry, ConditionalTransferParams, NetworkId, StarkwareConditionalTransfer,
    StarkwareTransfer, TransferParams,
};
use crate::utils::{dec_to_biguint, iso_timestamp_to_epoch_hours};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;

impl StarkwareTransfer {
    /// 이체 파라미터를 StarkEx 이체로 변환 (담보 자산, 정확 변환)
    pub fn from_params(
        params: &TransferParams,
        network_id: NetworkId,
        registry: &AssetRegistry,
    ) -> StarkExResult<Self> {
        let quantums_amount =
            registry.to_quantums_exact(&params.human_amount, registry.collateral_asset())?;

        let transfer = Self {
            sender_position_id: params.sender_position_id.clone(),
            receiver_position_id: params.receiver_position_id.clone(),
            receiver_public_key: params.receiver_public_key.clone(),
            asset_id: registry.collateral_asset_id(network_id)?.to_string(),
            quantums_amount,
            nonce: nonce_from_client_id(&params.client_id),
            expiration_epoch_hours: iso_timestamp_to_epoch_hours(&params.expiration_iso_timestamp)?,
        };
        transfer.field_elements()?;
        Ok(transfer)
    }

    /// `[assetId, feeAssetId, receiverPublicKey, positions word, amounts word]`
    pub(crate) fn field_elements(&self) -> StarkExResult<Vec<Felt>> {
        let (head, words) = self.encode(TRANSFER_PREFIX)?;
        Ok(head.into_iter().chain(words).collect())
    }

    /// Shared by plain and conditional transfers; only the type tag differs.
    fn encode(&self, prefix: u64) -> StarkExResult<([Felt; 3], [Felt; 2])> {
        let asset_id = hex_element("assetId", &self.asset_id, ASSET_ID_COLLATERAL_BITS)?;
        let receiver_public_key =
            hex_element("receiverPublicKey", &self.receiver_public_key, PUBLIC_KEY_BITS)?;

        let sender = dec_to_biguint("senderPositionId", &self.sender_position_id)?;
        let receiver = dec_to_biguint("receiverPositionId", &self.receiver_position_id)?;
        let nonce = dec_to_biguint("nonce", &self.nonce)?;
        let amount = dec_to_biguint("quantumsAmount", &self.quantums_amount)?;

        // Fees are not charged on transfers: fee position is the sender, max fee is zero
        let positions_word = pack_word(
            &TRANSFER_WORD_POSITIONS,
            &[sender.clone(), receiver, sender, nonce],
        )?;
        let amounts_word = pack_word(
            &TRANSFER_WORD_AMOUNTS,
            &[
                BigUint::from(prefix),
                amount,
                BigUint::default(),
                BigUint::from(self.expiration_epoch_hours),
            ],
        )?;

        Ok((
            [asset_id, Felt::ZERO, receiver_public_key],
            [positions_word, amounts_word],
        ))
    }
}

impl StarkwareConditionalTransfer {
    /// 조건부 이체 파라미터 변환
    pub fn from_params(
        params: &ConditionalTransferParams,
        network_id: NetworkId,
        registry: &AssetRegistry,
    ) -> StarkExResult<Self> {
        let transfer = Self {
            transfer: StarkwareTransfer::from_params(&params.transfer, network_id, registry)?,
            condition: fact_to_condition(&params.fact_registry_address, &params.fact)?,
        };
        transfer.field_elements()?;
        Ok(transfer)
    }

    /// `[assetId, feeAssetId, receiverPublicKey, condition, positions word, amounts word]`
    pub(crate) fn field_elements(&self) -> StarkExResult<Vec<Felt>> {
        let (head, words) = self.transfer.encode(CONDITIONAL_TRANSFER_PREFIX)?;
        let condition = hex_element("condition", &self.condition, CONDITION_BITS)?;

        let mut elements = head.to_vec();
        elements.push(condition);
        elements.extend(words);
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::felt::felt_to_biguint;

    fn transfer_params() -> TransferParams {
        TransferParams {
            sender_position_id: "12345".into(),
            receiver_position_id: "67890".into(),
            receiver_public_key: "0x5fa3383597691ea9d827a79e1a4f0f7949435ced18ca9619de8ab97e661020".into(),
            human_amount: "49.478023".into(),
            client_id: "This is an ID that the client came up with to describe this transfer".into(),
            expiration_iso_timestamp: "2020-09-17T04:15:55.028Z".into(),
        }
    }

    #[test]
    fn test_transfer_from_params() {
        let registry = AssetRegistry::builtin();
        let transfer = StarkwareTransfer::from_params(&transfer_params(), NetworkId::Goerli, &registry).unwrap();
        assert_eq!(transfer.quantums_amount, "49478023");
        assert_eq!(transfer.expiration_epoch_hours, 444533);
        assert_eq!(transfer.asset_id, registry.collateral_asset_id(NetworkId::Goerli).unwrap());
    }

    #[test]
    fn test_transfer_amount_must_be_exact() {
        let registry = AssetRegistry::builtin();
        let mut params = transfer_params();
        params.human_amount = "49.4780231".into();
        let err = StarkwareTransfer::from_params(&params, NetworkId::Goerli, &registry).unwrap_err();
        assert_eq!(err.code(), "NOT_A_MULTIPLE_OF_QUANTUM");
    }

    #[test]
    fn test_transfer_layout() {
        let registry = AssetRegistry::builtin();
        let transfer = StarkwareTransfer::from_params(&transfer_params(), NetworkId::Goerli, &registry).unwrap();
        let elements = transfer.field_elements().unwrap();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[1], Felt::ZERO);

        let nonce: BigUint = transfer.nonce.parse().unwrap();
        let positions = ((((BigUint::from(12345u32) << 64u32) + BigUint::from(67890u32)) << 64u32)
            + BigUint::from(12345u32))
            << 32u32;
        assert_eq!(felt_to_biguint(&elements[3]), positions + nonce);

        let amounts = (((BigUint::from(4u8) << 64u32) + BigUint::from(49478023u32)) << 96u32
            | BigUint::from(444533u32))
            << 81u32;
        assert_eq!(felt_to_biguint(&elements[4]), amounts);
    }

    #[test]
    fn test_conditional_transfer_layout() {
        let registry = AssetRegistry::builtin();
        let params = ConditionalTransferParams {
            transfer: transfer_params(),
            fact_registry_address: "0x12aa12aa12aa12aa12aa12aa12aa12aa12aa12aa".into(),
            fact: "0x12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff12ff".into(),
        };
        let conditional =
            StarkwareConditionalTransfer::from_params(&params, NetworkId::Goerli, &registry).unwrap();
        let elements = conditional.field_elements().unwrap();
        assert_eq!(elements.len(), 6);

        let plain = conditional.transfer.field_elements().unwrap();
        assert_eq!(elements[..3], plain[..3]);
        assert_eq!(elements[4], plain[3]);
        // only the type tag differs in the last word
        let diff = felt_to_biguint(&elements[5]) - felt_to_biguint(&plain[4]);
        assert_eq!(diff, BigUint::from(1u8) << (64u32 + 64 + 32 + 81));
    }
}
