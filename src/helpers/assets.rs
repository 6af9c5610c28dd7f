//! Quantum conversion
//!
//! 사람이 읽는 수량(human amount)과 StarkEx quantum 정수 사이의 변환.
//! 모든 연산은 [`Precise`]를 사용하므로 부동소수점 오차가 없습니다.

use crate::errors::{StarkExError, StarkExResult};
use crate::types::{AssetRegistry, NetworkId, OrderAmountParams, OrderSide, StarkwareAmounts};
use crate::utils::{dec_to_biguint, Precise, Rounding, MAX_DECIMALS};
use num_bigint::BigInt;

fn parse_human_amount(field: &str, value: &str) -> StarkExResult<Precise> {
    let amount = Precise::parse(value).ok_or_else(|| {
        StarkExError::invalid_params(format!("{field}: not a decimal number: {value:?}"))
    })?;
    if amount.is_negative() {
        return Err(StarkExError::invalid_params(format!(
            "{field}: must not be negative: {value}"
        )));
    }
    Ok(amount)
}

fn out_of_range(value: &str) -> StarkExError {
    StarkExError::invalid_params(format!(
        "amount out of range: {value} (at most {MAX_DECIMALS} decimal places either way)"
    ))
}

fn quantize(
    amount: &Precise,
    display: &str,
    asset: &str,
    resolution: u32,
    rounding: Rounding,
) -> StarkExResult<String> {
    let places = i32::try_from(resolution)
        .map_err(|_| StarkExError::invalid_params(format!("resolution too large: {resolution}")))?;

    amount
        .shift(places)
        .ok_or_else(|| out_of_range(display))?
        .to_integer(rounding)
        .map(|q| q.to_string())
        .ok_or_else(|| StarkExError::NotAMultipleOfQuantum {
            amount: display.to_string(),
            asset: asset.to_string(),
            resolution,
        })
}

impl AssetRegistry {
    fn to_quantums(&self, human_amount: &str, asset: &str, rounding: Rounding) -> StarkExResult<String> {
        let resolution = self.resolution(asset)?;
        let amount = parse_human_amount("humanAmount", human_amount)?;
        quantize(&amount, human_amount, asset, resolution, rounding)
    }

    /// 정확히 나누어떨어지지 않으면 `NotAMultipleOfQuantum` 오류
    pub fn to_quantums_exact(&self, human_amount: &str, asset: &str) -> StarkExResult<String> {
        self.to_quantums(human_amount, asset, Rounding::Exact)
    }

    /// 내림 변환
    pub fn to_quantums_round_down(&self, human_amount: &str, asset: &str) -> StarkExResult<String> {
        self.to_quantums(human_amount, asset, Rounding::Floor)
    }

    /// 올림 변환
    pub fn to_quantums_round_up(&self, human_amount: &str, asset: &str) -> StarkExResult<String> {
        self.to_quantums(human_amount, asset, Rounding::Ceil)
    }

    /// quantum 정수를 사람이 읽는 수량으로 변환
    pub fn from_quantums(&self, quantums: &str, asset: &str) -> StarkExResult<String> {
        let resolution = self.resolution(asset)?;
        let integer = BigInt::from(dec_to_biguint("quantums", quantums)?);
        let places = i32::try_from(resolution)
            .map_err(|_| StarkExError::invalid_params(format!("resolution too large: {resolution}")))?;
        Precise::from_integer(integer)
            .shift(-places)
            .map(|amount| amount.to_str_repr())
            .ok_or_else(|| StarkExError::invalid_params(format!("resolution too large: {resolution}")))
    }

    /// 주문 파라미터를 StarkEx quantum 수량으로 변환
    ///
    /// With a price, the collateral amount is rounded up when buying and down when
    /// selling. With a quote amount, it must convert exactly.
    pub fn get_starkware_amounts(
        &self,
        params: &OrderAmountParams,
        network_id: NetworkId,
    ) -> StarkExResult<StarkwareAmounts> {
        let market = self.market(&params.market)?;
        let synthetic = market.synthetic.as_str();
        let collateral = market.collateral.as_str();
        let is_buying_synthetic = params.side == OrderSide::Buy;

        let quantums_amount_synthetic = self.to_quantums_exact(&params.human_size, synthetic)?;

        let quantums_amount_collateral =
            match (&params.human_price, &params.human_quote_amount) {
                (Some(human_price), None) => {
                    let size = parse_human_amount("humanSize", &params.human_size)?;
                    let price = parse_human_amount("humanPrice", human_price)?;
                    let quote = size
                        .mul(&price)
                        .ok_or_else(|| out_of_range(&params.human_size))?;
                    let rounding = if is_buying_synthetic {
                        Rounding::Ceil
                    } else {
                        Rounding::Floor
                    };
                    let resolution = self.resolution(collateral)?;
                    quantize(&quote, &quote.to_str_repr(), collateral, resolution, rounding)?
                },
                (None, Some(human_quote_amount)) => {
                    self.to_quantums_exact(human_quote_amount, collateral)?
                },
                (Some(_), Some(_)) => {
                    return Err(StarkExError::invalid_params(
                        "Specify exactly one of humanPrice and humanQuoteAmount, not both",
                    ))
                },
                (None, None) => {
                    return Err(StarkExError::invalid_params(
                        "One of humanPrice or humanQuoteAmount is required",
                    ))
                },
            };

        Ok(StarkwareAmounts {
            quantums_amount_synthetic,
            quantums_amount_collateral,
            asset_id_synthetic: self.synthetic_asset_id(synthetic)?.to_string(),
            asset_id_collateral: self.collateral_asset_id(network_id)?.to_string(),
            is_buying_synthetic,
        })
    }
}

/// 기본 레지스트리로 정확 변환
pub fn to_quantums_exact(human_amount: &str, asset: &str) -> StarkExResult<String> {
    AssetRegistry::global().to_quantums_exact(human_amount, asset)
}

/// 기본 레지스트리로 내림 변환
pub fn to_quantums_round_down(human_amount: &str, asset: &str) -> StarkExResult<String> {
    AssetRegistry::global().to_quantums_round_down(human_amount, asset)
}

/// 기본 레지스트리로 올림 변환
pub fn to_quantums_round_up(human_amount: &str, asset: &str) -> StarkExResult<String> {
    AssetRegistry::global().to_quantums_round_up(human_amount, asset)
}

/// 기본 레지스트리로 역변환
pub fn from_quantums(quantums: &str, asset: &str) -> StarkExResult<String> {
    AssetRegistry::global().from_quantums(quantums, asset)
}

/// 기본 레지스트리로 주문 수량 변환
pub fn get_starkware_amounts(
    params: &OrderAmountParams,
    network_id: NetworkId,
) -> StarkExResult<StarkwareAmounts> {
    AssetRegistry::global().get_starkware_amounts(params, network_id)
}

/// 최대 수수료 quantum 계산: `ceil(limit_fee * quantums_amount_collateral)`
///
/// The product is computed exactly, so the signed bound is the smallest integer that
/// is not below the requested fraction of the collateral amount.
pub fn get_starkware_limit_fee_amount(
    limit_fee: &str,
    quantums_amount_collateral: &str,
) -> StarkExResult<String> {
    let fee = parse_human_amount("limitFee", limit_fee)?;
    let collateral = BigInt::from(dec_to_biguint(
        "quantumsAmountCollateral",
        quantums_amount_collateral,
    )?);

    fee.mul(&Precise::from_integer(collateral))
        .ok_or_else(|| out_of_range(limit_fee))?
        .to_integer(Rounding::Ceil)
        .map(|amount| amount.to_string())
        .ok_or_else(|| StarkExError::invalid_params("limit fee could not be rounded"))
}
