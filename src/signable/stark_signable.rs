//! Signable - 메시지 하나를 해싱, 서명, 검증하는 래퍼
//!
//! The hash is computed on first use and cached for the lifetime of the instance.
//! Concurrent first calls compute it once; later calls share the cached value.

use super::message::{MessageKind, StarkMessage};
use crate::config::StarkExConfig;
use crate::crypto::{generate_k, CryptoBackend, StarkKeyPair, StarkSignature};
use crate::errors::{StarkExError, StarkExResult};
use crate::types::{
    ConditionalTransferParams, NetworkId, OraclePriceParams, OrderParams,
    StarkwareConditionalTransfer, StarkwareOraclePrice, StarkwareOrder, StarkwareRegistration,
    StarkwareTransfer, StarkwareWithdrawal, TransferParams, WithdrawalParams,
};
use crate::utils::felt_to_hex32;
use once_cell::sync::OnceCell;
use starknet_types_core::felt::Felt;
use std::sync::RwLock;

/// Signable 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignableState {
    /// 메시지만 설정됨
    Created,
    /// 해시 캐시됨
    HashComputed,
    /// 한 번 이상 서명됨
    Signed,
}

/// 서명 가능한 StarkEx 메시지
#[derive(Debug)]
pub struct Signable {
    message: StarkMessage,
    network_id: NetworkId,
    backend: CryptoBackend,
    hash: OnceCell<Felt>,
    last_signature: RwLock<Option<StarkSignature>>,
}

impl Signable {
    /// 정규화된 메시지로 생성 (검사 없음, 외부 메시지는 [`Signable::try_new`] 사용)
    pub fn new(message: StarkMessage, network_id: NetworkId, backend: CryptoBackend) -> Self {
        Self {
            message,
            network_id,
            backend,
            hash: OnceCell::new(),
            last_signature: RwLock::new(None),
        }
    }

    /// 비트 폭 검사 후 생성
    pub fn try_new(
        message: StarkMessage,
        network_id: NetworkId,
        backend: CryptoBackend,
    ) -> StarkExResult<Self> {
        message.validate()?;
        Ok(Self::new(message, network_id, backend))
    }

    fn with_config(message: StarkMessage, config: &StarkExConfig) -> Self {
        Self::new(message, config.network_id(), config.backend())
    }

    /// 주문
    pub fn from_order(params: &OrderParams, config: &StarkExConfig) -> StarkExResult<Self> {
        let order = StarkwareOrder::from_params(params, config.network_id(), config.registry())?;
        Ok(Self::with_config(StarkMessage::Order(order), config))
    }

    /// 이체
    pub fn from_transfer(params: &TransferParams, config: &StarkExConfig) -> StarkExResult<Self> {
        let transfer =
            StarkwareTransfer::from_params(params, config.network_id(), config.registry())?;
        Ok(Self::with_config(StarkMessage::Transfer(transfer), config))
    }

    /// 조건부 이체
    pub fn from_conditional_transfer(
        params: &ConditionalTransferParams,
        config: &StarkExConfig,
    ) -> StarkExResult<Self> {
        let transfer = StarkwareConditionalTransfer::from_params(
            params,
            config.network_id(),
            config.registry(),
        )?;
        Ok(Self::with_config(StarkMessage::ConditionalTransfer(transfer), config))
    }

    /// 주소 지정 출금
    pub fn from_withdrawal(params: &WithdrawalParams, config: &StarkExConfig) -> StarkExResult<Self> {
        let withdrawal =
            StarkwareWithdrawal::from_params(params, config.network_id(), config.registry())?;
        Ok(Self::with_config(StarkMessage::Withdrawal(withdrawal), config))
    }

    /// 등록
    pub fn from_registration(
        eth_key: impl Into<String>,
        stark_key: impl Into<String>,
        config: &StarkExConfig,
    ) -> StarkExResult<Self> {
        let registration = StarkMessage::Registration(StarkwareRegistration::new(eth_key, stark_key));
        Self::try_new(registration, config.network_id(), config.backend())
    }

    /// 오라클 가격
    pub fn from_oracle_price(params: &OraclePriceParams, config: &StarkExConfig) -> StarkExResult<Self> {
        let price = StarkwareOraclePrice::from_params(params)?;
        Ok(Self::with_config(StarkMessage::OraclePrice(price), config))
    }

    pub fn message(&self) -> &StarkMessage {
        &self.message
    }

    pub fn kind(&self) -> MessageKind {
        self.message.kind()
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn backend(&self) -> CryptoBackend {
        self.backend
    }

    /// 현재 상태
    pub fn state(&self) -> SignableState {
        if self.last_signature().is_some() {
            SignableState::Signed
        } else if self.hash.get().is_some() {
            SignableState::HashComputed
        } else {
            SignableState::Created
        }
    }

    /// 메시지 해시 (최초 호출시 계산 후 캐시)
    ///
    /// A failed computation caches nothing.
    pub fn hash(&self) -> StarkExResult<Felt> {
        self.hash
            .get_or_try_init(|| {
                let hash = self.message.compute_hash(self.backend)?;
                tracing::debug!(
                    kind = %self.kind(),
                    network = %self.network_id,
                    backend = %self.backend,
                    hash = %felt_to_hex32(&hash),
                    "computed message hash"
                );
                Ok(hash)
            })
            .copied()
    }

    /// 메시지 해시 (64자리 16진수, 접두사 없음)
    pub fn hash_hex(&self) -> StarkExResult<String> {
        Ok(felt_to_hex32(&self.hash()?))
    }

    /// 결정적 k (RFC 6979)로 서명하고 직렬화된 서명 반환
    ///
    /// Registration signatures are `0x` + 192 hex characters and need the key pair's y
    /// coordinate. All other kinds produce 128 hex characters.
    pub fn sign(&self, keys: &StarkKeyPair) -> StarkExResult<String> {
        let hash = self.hash()?;
        let k = generate_k(keys.private_key(), &hash);
        self.sign_with_k(keys, &k)
    }

    /// 지정한 k로 서명
    pub fn sign_with_k(&self, keys: &StarkKeyPair, k: &Felt) -> StarkExResult<String> {
        let signature = self.compute_signature(keys, k)?;
        let serialized = self.serialize_signature(&signature, keys)?;
        self.record_signature(signature);
        Ok(serialized)
    }

    /// 지정한 k로 서명하고 (r, s) 반환
    pub fn sign_raw(&self, keys: &StarkKeyPair, k: &Felt) -> StarkExResult<StarkSignature> {
        let signature = self.compute_signature(keys, k)?;
        self.record_signature(signature);
        Ok(signature)
    }

    fn compute_signature(&self, keys: &StarkKeyPair, k: &Felt) -> StarkExResult<StarkSignature> {
        let hash = self.hash()?;
        let signature = self.backend.sign(keys.private_key(), &hash, k)?;

        tracing::debug!(
            kind = %self.kind(),
            network = %self.network_id,
            public_key = %keys.public_key_hex(),
            "signed message"
        );
        Ok(signature)
    }

    fn record_signature(&self, signature: StarkSignature) {
        match self.last_signature.write() {
            Ok(mut last) => *last = Some(signature),
            Err(poisoned) => *poisoned.into_inner() = Some(signature),
        }
    }

    /// 메시지 종류에 맞는 형식으로 서명 직렬화
    pub fn serialize_signature(&self, signature: &StarkSignature, keys: &StarkKeyPair) -> StarkExResult<String> {
        match self.kind() {
            MessageKind::Registration => {
                let y = keys.public_key_y().ok_or_else(|| {
                    StarkExError::invalid_params(
                        "registration signatures require the public key y coordinate",
                    )
                })?;
                Ok(signature.serialize_with_y(y))
            },
            _ => Ok(signature.serialize()),
        }
    }

    /// 직렬화된 서명 검증
    ///
    /// A signature that cannot be decoded verifies as false. Errors are reserved for
    /// hashing and backend failures.
    pub fn verify_signature(&self, signature: &str, public_key: &Felt) -> StarkExResult<bool> {
        let decoded = match self.kind() {
            MessageKind::Registration => StarkSignature::deserialize_with_y(signature).map(|(sig, _)| sig),
            _ => StarkSignature::deserialize(signature),
        };
        let signature = match decoded {
            Ok(signature) => signature,
            Err(e) => {
                tracing::debug!(kind = %self.kind(), error = %e, "undecodable signature");
                return Ok(false);
            },
        };

        let hash = self.hash()?;
        let valid = self.backend.verify(public_key, &hash, &signature)?;
        tracing::trace!(kind = %self.kind(), valid, "verified signature");
        Ok(valid)
    }

    /// 마지막 서명
    pub fn last_signature(&self) -> Option<StarkSignature> {
        match self.last_signature.read() {
            Ok(last) => *last,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderAmountParams, OrderSide};

    fn config() -> StarkExConfig {
        StarkExConfig::new().with_network_id(NetworkId::Goerli)
    }

    fn keys() -> StarkKeyPair {
        StarkKeyPair::from_hex("0x58c7d5a90b1776bde86ebac077e053ed85b0f7164f53b080304a531947d5e3").unwrap()
    }

    fn order() -> Signable {
        let params = OrderParams {
            position_id: "12345".into(),
            amounts: OrderAmountParams::with_price("BTC-USD", OrderSide::Sell, "145.0005", "350.00067"),
            limit_fee: "0.125".into(),
            expiration_iso_timestamp: "2020-09-17T04:15:55.028Z".into(),
            client_id: Some("order client id".into()),
            nonce: None,
        };
        Signable::from_order(&params, &config()).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let signable = order();
        assert_eq!(signable.state(), SignableState::Created);

        let hash = signable.hash().unwrap();
        assert_eq!(signable.state(), SignableState::HashComputed);
        assert_eq!(signable.hash().unwrap(), hash);

        signable.sign(&keys()).unwrap();
        assert_eq!(signable.state(), SignableState::Signed);

        // verification does not change state
        let signature = signable.last_signature().unwrap().serialize();
        assert!(signable.verify_signature(&signature, keys().public_key()).unwrap());
        assert_eq!(signable.state(), SignableState::Signed);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = order().sign(&keys()).unwrap();
        let b = order().sign(&keys()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn test_resign_with_other_key() {
        let signable = order();
        let first = signable.sign(&keys()).unwrap();
        let other = StarkKeyPair::from_private_key(Felt::from(424242u64)).unwrap();
        let second = signable.sign(&other).unwrap();

        assert_ne!(first, second);
        assert_eq!(signable.last_signature().unwrap().serialize(), second);
        assert!(signable.verify_signature(&second, other.public_key()).unwrap());
        assert!(!signable.verify_signature(&second, keys().public_key()).unwrap());
    }

    #[test]
    fn test_garbage_signature_is_false() {
        let signable = order();
        assert!(!signable.verify_signature("not hex", keys().public_key()).unwrap());
        assert!(!signable.verify_signature("00", keys().public_key()).unwrap());
    }

    #[test]
    fn test_hash_hex_width() {
        assert_eq!(order().hash_hex().unwrap().len(), 64);
    }

    #[test]
    fn test_failed_hash_is_not_cached() {
        let signable = Signable::new(order().message().clone(), NetworkId::Goerli, CryptoBackend::Native);
        if !CryptoBackend::Native.is_available() {
            assert_eq!(signable.hash().unwrap_err().code(), "BACKEND_UNAVAILABLE");
            assert_eq!(signable.state(), SignableState::Created);
        }
    }

    #[test]
    fn test_registration_signature() {
        let keys = keys();
        let signable = Signable::from_registration(
            "0x1234567890123456789012345678901234567890",
            keys.public_key_hex(),
            &config(),
        )
        .unwrap();
        let signature = signable.sign(&keys).unwrap();
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 192);
        assert!(signable.verify_signature(&signature, keys.public_key()).unwrap());

        let fresh = Signable::from_registration(
            "0x1234567890123456789012345678901234567890",
            keys.public_key_hex(),
            &config(),
        )
        .unwrap();
        let without_y = StarkKeyPair::from_parts(*keys.private_key(), *keys.public_key(), None).unwrap();
        assert_eq!(fresh.sign(&without_y).unwrap_err().code(), "INVALID_PARAMS");
        assert!(fresh.last_signature().is_none());
    }

    #[test]
    fn test_invalid_messages_fail_at_construction() {
        let err = Signable::from_registration("0x1234", "0x02", &config()).unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");

        let mut message = order().message().clone();
        if let StarkMessage::Order(order) = &mut message {
            order.nonce = "4294967296".into();
        }
        let err = Signable::try_new(message, NetworkId::Goerli, CryptoBackend::Portable).unwrap_err();
        assert_eq!(err.code(), "FIELD_OVERFLOW");

        let message = order().message().clone();
        assert!(Signable::try_new(message, NetworkId::Goerli, CryptoBackend::Portable).is_ok());
    }
}
