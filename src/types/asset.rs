//! Asset and market registry - 자산 해상도 및 StarkEx 자산 ID 설정

use super::NetworkId;
use crate::constants::{
    DEFAULT_ASSETS, DEFAULT_COLLATERAL_ASSET, DEFAULT_COLLATERAL_ASSET_IDS, DEFAULT_MARKETS,
};
use crate::errors::{StarkExError, StarkExResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

static DEFAULT_REGISTRY: Lazy<AssetRegistry> = Lazy::new(AssetRegistry::builtin);

/// 자산 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
    /// 심볼 (예: 'BTC')
    pub symbol: String,
    /// 해상도 (1 quantum = 10^-resolution)
    pub resolution: u32,
    /// 합성 자산 ID (담보 자산은 네트워크별 ID 사용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
}

/// 마켓 설정 (합성 자산 / 담보 자산)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketConfig {
    /// 마켓 심볼 (예: 'BTC-USD')
    pub market: String,
    /// 합성 자산 심볼
    pub synthetic: String,
    /// 담보 자산 심볼
    pub collateral: String,
}

/// Serialized registry layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryFile {
    collateral_asset: String,
    assets: Vec<AssetConfig>,
    markets: Vec<MarketConfig>,
    collateral_asset_ids: HashMap<NetworkId, String>,
}

/// 자산/마켓 레지스트리
///
/// Immutable once built. Every market must reference registered assets and the
/// collateral asset must itself be registered.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    collateral_asset: String,
    assets: HashMap<String, AssetConfig>,
    markets: HashMap<String, MarketConfig>,
    collateral_asset_ids: HashMap<NetworkId, String>,
}

impl AssetRegistry {
    /// Process-wide built-in registry
    pub fn global() -> &'static AssetRegistry {
        &DEFAULT_REGISTRY
    }

    /// Built-in Flash1 table
    pub fn builtin() -> Self {
        let assets = DEFAULT_ASSETS
            .iter()
            .map(|(symbol, resolution, asset_id)| {
                (
                    symbol.to_string(),
                    AssetConfig {
                        symbol: symbol.to_string(),
                        resolution: *resolution,
                        asset_id: asset_id.map(str::to_string),
                    },
                )
            })
            .collect();

        let markets = DEFAULT_MARKETS
            .iter()
            .map(|(market, synthetic)| {
                (
                    market.to_string(),
                    MarketConfig {
                        market: market.to_string(),
                        synthetic: synthetic.to_string(),
                        collateral: DEFAULT_COLLATERAL_ASSET.to_string(),
                    },
                )
            })
            .collect();

        let collateral_asset_ids = DEFAULT_COLLATERAL_ASSET_IDS
            .iter()
            .map(|(network, id)| (*network, id.to_string()))
            .collect();

        Self {
            collateral_asset: DEFAULT_COLLATERAL_ASSET.to_string(),
            assets,
            markets,
            collateral_asset_ids,
        }
    }

    /// JSON 문자열에서 레지스트리 로드
    pub fn from_json_str(json: &str) -> StarkExResult<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::from_file_layout(file)
    }

    /// JSON 파일에서 레지스트리 로드
    pub fn from_json_file(path: impl AsRef<Path>) -> StarkExResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let registry = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            assets = registry.assets.len(),
            markets = registry.markets.len(),
            "loaded asset registry"
        );
        Ok(registry)
    }

    /// JSON 문자열로 변환
    pub fn to_json_string(&self) -> StarkExResult<String> {
        let mut assets: Vec<AssetConfig> = self.assets.values().cloned().collect();
        assets.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        let mut markets: Vec<MarketConfig> = self.markets.values().cloned().collect();
        markets.sort_by(|a, b| a.market.cmp(&b.market));

        let file = RegistryFile {
            collateral_asset: self.collateral_asset.clone(),
            assets,
            markets,
            collateral_asset_ids: self.collateral_asset_ids.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    fn from_file_layout(file: RegistryFile) -> StarkExResult<Self> {
        let mut assets = HashMap::new();
        for asset in file.assets {
            if assets.contains_key(&asset.symbol) {
                return Err(StarkExError::ConfigError {
                    message: format!("Duplicate asset {}", asset.symbol),
                });
            }
            assets.insert(asset.symbol.clone(), asset);
        }

        if !assets.contains_key(&file.collateral_asset) {
            return Err(StarkExError::ConfigError {
                message: format!("Collateral asset {} is not registered", file.collateral_asset),
            });
        }

        let mut markets = HashMap::new();
        for market in file.markets {
            for symbol in [&market.synthetic, &market.collateral] {
                if !assets.contains_key(symbol) {
                    return Err(StarkExError::ConfigError {
                        message: format!("Market {} references unknown asset {symbol}", market.market),
                    });
                }
            }
            let synthetic_has_id = assets
                .get(&market.synthetic)
                .is_some_and(|a: &AssetConfig| a.asset_id.is_some());
            if !synthetic_has_id {
                return Err(StarkExError::ConfigError {
                    message: format!("Synthetic asset {} has no asset id", market.synthetic),
                });
            }
            markets.insert(market.market.clone(), market);
        }

        Ok(Self {
            collateral_asset: file.collateral_asset,
            assets,
            markets,
            collateral_asset_ids: file.collateral_asset_ids,
        })
    }

    /// 자산 설정 조회
    pub fn asset(&self, symbol: &str) -> StarkExResult<&AssetConfig> {
        self.assets.get(symbol).ok_or_else(|| StarkExError::UnknownAsset {
            asset: symbol.to_string(),
        })
    }

    /// 자산 해상도 조회
    pub fn resolution(&self, symbol: &str) -> StarkExResult<u32> {
        Ok(self.asset(symbol)?.resolution)
    }

    /// 합성 자산 ID 조회
    pub fn synthetic_asset_id(&self, symbol: &str) -> StarkExResult<&str> {
        self.asset(symbol)?
            .asset_id
            .as_deref()
            .ok_or_else(|| StarkExError::UnknownAsset {
                asset: symbol.to_string(),
            })
    }

    /// 마켓 설정 조회
    pub fn market(&self, market: &str) -> StarkExResult<&MarketConfig> {
        self.markets.get(market).ok_or_else(|| StarkExError::UnknownMarket {
            market: market.to_string(),
        })
    }

    /// 담보 자산 심볼
    pub fn collateral_asset(&self) -> &str {
        &self.collateral_asset
    }

    /// 네트워크별 담보 자산 ID
    pub fn collateral_asset_id(&self, network_id: NetworkId) -> StarkExResult<&str> {
        self.collateral_asset_ids
            .get(&network_id)
            .map(String::as_str)
            .ok_or_else(|| StarkExError::ConfigError {
                message: format!("No collateral asset id for network {network_id}"),
            })
    }

    /// 등록된 마켓 심볼 목록 (정렬)
    pub fn markets(&self) -> Vec<&str> {
        let mut markets: Vec<&str> = self.markets.keys().map(String::as_str).collect();
        markets.sort_unstable();
        markets
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_markets_reference_registered_assets() {
        let registry = AssetRegistry::builtin();
        for market in registry.markets() {
            let config = registry.market(market).unwrap();
            assert!(registry.asset(&config.synthetic).is_ok());
            assert!(registry.synthetic_asset_id(&config.synthetic).is_ok());
            assert_eq!(config.collateral, registry.collateral_asset());
        }
    }

    #[test]
    fn test_market_symbols_match_assets() {
        let registry = AssetRegistry::builtin();
        for market in registry.markets() {
            let (base, quote) = market.split_once('-').unwrap();
            assert_eq!(registry.market(market).unwrap().synthetic, base);
            assert_eq!(quote, "USD");
        }
    }

    #[test]
    fn test_unknown_lookups() {
        let registry = AssetRegistry::builtin();
        assert_eq!(registry.asset("UNKNOWN").unwrap_err().code(), "UNKNOWN_ASSET");
        assert_eq!(registry.market("DOGE-USD").unwrap_err().code(), "UNKNOWN_MARKET");
        // collateral has no synthetic id
        assert!(registry.synthetic_asset_id("USDT").is_err());
    }

    #[test]
    fn test_collateral_ids_for_every_network() {
        let registry = AssetRegistry::builtin();
        for network in [NetworkId::Mainnet, NetworkId::Ropsten, NetworkId::Goerli] {
            assert!(registry.collateral_asset_id(network).unwrap().starts_with("0x"));
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let registry = AssetRegistry::builtin();
        let json = registry.to_json_string().unwrap();
        let loaded = AssetRegistry::from_json_str(&json).unwrap();
        assert_eq!(loaded.resolution("BTC").unwrap(), 10);
        assert_eq!(
            loaded.collateral_asset_id(NetworkId::Goerli).unwrap(),
            registry.collateral_asset_id(NetworkId::Goerli).unwrap()
        );
    }

    #[test]
    fn test_json_rejects_dangling_market() {
        let json = r#"{
            "collateralAsset": "USDT",
            "assets": [{"symbol": "USDT", "resolution": 6}],
            "markets": [{"market": "BTC-USD", "synthetic": "BTC", "collateral": "USDT"}],
            "collateralAssetIds": {"goerli": "0x1"}
        }"#;
        let err = AssetRegistry::from_json_str(json).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_json_missing_network() {
        let json = r#"{
            "collateralAsset": "USDT",
            "assets": [
                {"symbol": "USDT", "resolution": 6},
                {"symbol": "SOL", "resolution": 7, "assetId": "0x534f4c2d370000000000000000000"}
            ],
            "markets": [{"market": "SOL-USD", "synthetic": "SOL", "collateral": "USDT"}],
            "collateralAssetIds": {"goerli": "0x1"}
        }"#;
        let registry = AssetRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.resolution("SOL").unwrap(), 7);
        assert!(registry.collateral_asset_id(NetworkId::Mainnet).is_err());
    }
}
