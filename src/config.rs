//! Signing configuration

use crate::crypto::CryptoBackend;
use crate::errors::StarkExResult;
use crate::types::{AssetRegistry, NetworkId};
use std::path::Path;
use std::sync::Arc;

/// 서명 설정
#[derive(Debug, Clone)]
pub struct StarkExConfig {
    network_id: NetworkId,
    backend: CryptoBackend,
    registry: Arc<AssetRegistry>,
}

impl StarkExConfig {
    /// 기본 설정 생성 (mainnet, portable 백엔드, 내장 자산 테이블)
    pub fn new() -> Self {
        Self {
            network_id: NetworkId::Mainnet,
            backend: CryptoBackend::Portable,
            registry: Arc::new(AssetRegistry::global().clone()),
        }
    }

    /// 네트워크 설정
    pub fn with_network_id(mut self, network_id: NetworkId) -> Self {
        self.network_id = network_id;
        self
    }

    /// 암호화 백엔드 설정
    pub fn with_backend(mut self, backend: CryptoBackend) -> Self {
        self.backend = backend;
        self
    }

    /// 자산 레지스트리 설정
    pub fn with_registry(mut self, registry: AssetRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    /// JSON 파일에서 자산 레지스트리 로드
    pub fn with_registry_file(self, path: impl AsRef<Path>) -> StarkExResult<Self> {
        Ok(self.with_registry(AssetRegistry::from_json_file(path)?))
    }

    // === Getters ===

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn backend(&self) -> CryptoBackend {
        self.backend
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }
}

impl Default for StarkExConfig {
    fn default() -> Self {
        Self::new()
    }
}
