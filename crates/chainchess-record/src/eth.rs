//! wei 単位の金額と ETH 表示

use crate::error::RecordError;

/// wei 単位の金額
pub type Wei = u128;

/// 1 ETH = 10^18 wei
pub const WEI_PER_ETH: Wei = 1_000_000_000_000_000_000;

/// 1手あたりの基本コスト（0.0001 ETH）。実コストはこれ × stake multiplier
pub const BASE_MOVE_COST_WEI: Wei = 100_000_000_000_000;

/// stake multiplier を掛けた1手あたりのコスト
#[inline]
pub const fn cost_per_move(stake_multiplier: u64) -> Wei {
    BASE_MOVE_COST_WEI * stake_multiplier as Wei
}

/// wei を ETH 表示文字列にする（小数点以下 `decimals` 桁、切り捨て）
///
/// f64 を経由すると 10^18 スケールで誤差が出るため整数演算のみで
/// 整形する。
pub fn format_eth(wei: Wei, decimals: usize) -> String {
    let whole = wei / WEI_PER_ETH;
    if decimals == 0 {
        return whole.to_string();
    }
    let decimals = decimals.min(18);
    let frac = wei % WEI_PER_ETH;
    let frac_str = format!("{frac:018}");
    format!("{whole}.{}", &frac_str[..decimals])
}

/// ETH 表示文字列を wei にする（`format_eth` の逆、文字列ベース）
///
/// "0.01"、"1"、"1.5" 等を受け付ける。小数点以下 19 桁以上は不正。
pub fn parse_eth(s: &str) -> Result<Wei, RecordError> {
    let invalid = || RecordError::InvalidAmount(s.to_string());

    let (whole_str, frac_str) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole_str.is_empty() && frac_str.is_empty() {
        return Err(invalid());
    }
    if frac_str.len() > 18 {
        return Err(invalid());
    }

    let whole: Wei = if whole_str.is_empty() {
        0
    } else {
        whole_str.parse().map_err(|_| invalid())?
    };

    let frac: Wei = if frac_str.is_empty() {
        0
    } else {
        // 18桁に右側ゼロ埋めしてから読む
        let padded = format!("{frac_str:0<18}");
        padded.parse().map_err(|_| invalid())?
    };

    whole
        .checked_mul(WEI_PER_ETH)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(invalid)
}

/// wei 金額を JSON では10進文字列として扱う serde ヘルパ
///
/// uint256 は JS の Number に収まらないため、チェーン側ツールは
/// BigInt を文字列で運ぶ。`#[serde(with = "eth::wei_string")]` で使う。
pub mod wei_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::Wei;

    pub fn serialize<S: Serializer>(wei: &Wei, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&wei.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Wei, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| D::Error::custom(format!("invalid wei amount: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(WEI_PER_ETH, 4), "1.0000");
        assert_eq!(format_eth(BASE_MOVE_COST_WEI, 6), "0.000100");
        assert_eq!(format_eth(BASE_MOVE_COST_WEI, 4), "0.0001");
        assert_eq!(format_eth(1_500_000_000_000_000_000, 4), "1.5000");
        assert_eq!(format_eth(0, 4), "0.0000");
        assert_eq!(format_eth(3 * WEI_PER_ETH, 0), "3");
        // 切り捨て（四捨五入しない）
        assert_eq!(format_eth(1_999_999_999_999_999_999, 4), "1.9999");
    }

    #[test]
    fn test_parse_eth() {
        assert_eq!(parse_eth("1").unwrap(), WEI_PER_ETH);
        assert_eq!(parse_eth("0.0001").unwrap(), BASE_MOVE_COST_WEI);
        assert_eq!(parse_eth("1.5").unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(parse_eth("0.000000000000000001").unwrap(), 1);
        assert_eq!(parse_eth(".5").unwrap(), 500_000_000_000_000_000);

        assert!(parse_eth("").is_err());
        assert!(parse_eth(".").is_err());
        assert!(parse_eth("abc").is_err());
        assert!(parse_eth("1.2.3").is_err());
        assert!(parse_eth("0.0000000000000000001").is_err()); // 19桁
        assert!(parse_eth("-1").is_err());
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for s in ["0.0100", "1.2345", "12.0000"] {
            let wei = parse_eth(s).unwrap();
            assert_eq!(format_eth(wei, 4), s);
        }
    }

    #[test]
    fn test_cost_per_move() {
        assert_eq!(cost_per_move(1), BASE_MOVE_COST_WEI);
        assert_eq!(cost_per_move(10), BASE_MOVE_COST_WEI * 10);
    }
}
