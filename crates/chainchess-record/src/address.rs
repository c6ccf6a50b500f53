//! プレイヤーアドレス（Address）

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// 20byte のプレイヤーアドレス
///
/// `0x` + 40桁の16進文字列として受け取り、バイト列で保持する。
/// checksum 大文字小文字は区別しない（表示は小文字に正規化）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    /// ゼロアドレス（コントラクト上は「未割り当て」を意味する）
    pub const ZERO: Address = Address([0; 20]);

    /// 16進文字列からの変換
    pub fn parse(s: &str) -> Result<Address, RecordError> {
        let hex_part = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| RecordError::InvalidAddress(s.to_string()))?;
        let bytes =
            hex::decode(hex_part).map_err(|_| RecordError::InvalidAddress(s.to_string()))?;
        let bytes: [u8; 20] =
            bytes.try_into().map_err(|_| RecordError::InvalidAddress(s.to_string()))?;
        Ok(Address(bytes))
    }

    /// 内部バイト列を取得
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// ゼロアドレスかどうか
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 20]
    }

    /// 短縮表示（"0x1234...abcd"）
    ///
    /// ゼロアドレスは "—" として描画する。
    pub fn short(&self) -> String {
        if self.is_zero() {
            return "—".to_string();
        }
        let full = self.to_string();
        format!("{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for Address {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.to_string()
    }
}
